//! Schema validation of a parsed backend reply.
//!
//! Turns the snake_case wire object into an `AnalysisResult` or a tagged
//! rejection. `ats_score` keeps the loose "truthy" rule: any non-zero number
//! passes, while absent, null and `0` are rejected alike. A genuine score of
//! zero therefore cannot be told apart from a missing one.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::analysis::models::{AnalysisResult, CategoryScores};

/// Why a parsed reply was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("reply is not a JSON object")]
    NotAnObject,

    #[error("ats_score is missing, null or zero")]
    MissingScore,

    #[error("ats_score is not a number")]
    ScoreNotNumeric,

    #[error("{field} is not a list")]
    NotAList { field: &'static str },

    #[error("{field}[{index}] is not a string")]
    NonTextEntry { field: &'static str, index: usize },
}

const CATEGORY_FIELDS: [&str; 5] = [
    "technical_skills",
    "experience",
    "education",
    "keywords",
    "formatting",
];

/// Validates a parsed reply and maps it onto the semantic model.
pub fn validate_reply(reply: &Value) -> Result<AnalysisResult, ShapeViolation> {
    let object = reply.as_object().ok_or(ShapeViolation::NotAnObject)?;

    let ats_score = score_field(object)?;

    let matched_skills = match object.get("matched_skills") {
        Some(Value::Array(items)) => text_items("matched_skills", items)?,
        _ => {
            return Err(ShapeViolation::NotAList {
                field: "matched_skills",
            })
        }
    };

    let missing_skills = optional_text_list(object, "missing_skills")?;
    let recommendations = optional_text_list(object, "recommendations")?;
    let categories = object.get("categories").and_then(category_scores);

    Ok(AnalysisResult::new(
        ats_score,
        matched_skills,
        missing_skills,
        recommendations,
        categories,
    ))
}

fn score_field(object: &Map<String, Value>) -> Result<u8, ShapeViolation> {
    let raw = match object.get("ats_score") {
        None | Some(Value::Null) => return Err(ShapeViolation::MissingScore),
        Some(Value::Number(n)) => n.as_f64().ok_or(ShapeViolation::ScoreNotNumeric)?,
        Some(_) => return Err(ShapeViolation::ScoreNotNumeric),
    };

    // Zero after rounding and clamping reads the same as no score at all.
    match clamp_score("ats_score", raw) {
        0 => Err(ShapeViolation::MissingScore),
        score => Ok(score),
    }
}

/// Absent or null lists are empty; any other non-list is a violation.
fn optional_text_list(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ShapeViolation> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => text_items(field, items),
        Some(_) => Err(ShapeViolation::NotAList { field }),
    }
}

fn text_items(field: &'static str, items: &[Value]) -> Result<Vec<String>, ShapeViolation> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ShapeViolation::NonTextEntry { field, index })
        })
        .collect()
}

/// Categories are optional: anything short of five numeric fields is dropped.
fn category_scores(value: &Value) -> Option<CategoryScores> {
    if value.is_null() {
        return None;
    }

    let object = match value.as_object() {
        Some(object) => object,
        None => {
            warn!("Dropping categories: expected an object, got {value}");
            return None;
        }
    };

    let mut scores = [0u8; 5];
    for (slot, field) in scores.iter_mut().zip(CATEGORY_FIELDS) {
        match object.get(field).and_then(Value::as_f64) {
            Some(raw) => *slot = clamp_score(field, raw),
            None => {
                warn!("Dropping categories: {field} is missing or not a number");
                return None;
            }
        }
    }

    let [technical_skills, experience, education, keywords, formatting] = scores;
    Some(CategoryScores {
        technical_skills,
        experience,
        education,
        keywords,
        formatting,
    })
}

fn clamp_score(field: &str, raw: f64) -> u8 {
    let clamped = raw.round().clamp(0.0, 100.0);
    if clamped != raw.round() {
        warn!("{field} = {raw} is outside 0-100, clamped to {clamped}");
    }
    clamped as u8
}
