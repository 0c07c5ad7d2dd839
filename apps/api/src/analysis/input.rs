use serde::Serialize;

/// Below this many words the job description is flagged as thin. Advisory only.
pub const RECOMMENDED_MIN_WORDS: usize = 50;

/// Guidance shown while the user is typing a job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDescriptionGuidance {
    pub word_count: usize,
    pub char_count: usize,
    pub hint: Option<String>,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn inspect_job_description(text: &str) -> JobDescriptionGuidance {
    let words = word_count(text);
    let hint = (!text.is_empty() && words < RECOMMENDED_MIN_WORDS).then(|| {
        format!(
            "Minimum {RECOMMENDED_MIN_WORDS} words recommended for accurate analysis. \
             Add more details: include specific skills, requirements, and responsibilities."
        )
    });

    JobDescriptionGuidance {
        word_count: words,
        char_count: text.chars().count(),
        hint,
    }
}

/// Both inputs must carry something besides whitespace before an analysis starts.
pub fn has_required_inputs(job_description: &str, resume_text: &str) -> bool {
    !job_description.trim().is_empty() && !resume_text.trim().is_empty()
}
