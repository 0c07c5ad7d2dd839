//! Locates the JSON object inside a free-text backend reply.
//!
//! The backend is told to answer with a bare object but often wraps it in
//! commentary or code fences. The scanner takes the span from the first `{`
//! to its matching `}`; braces inside JSON strings are skipped so nested
//! objects such as `categories` never end the span early.

/// Returns the first balanced `{...}` span, or `None` when there is no `{`
/// or the object is never closed.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}
