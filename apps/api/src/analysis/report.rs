//! Display formatting handed to the UI alongside a result.

use serde::Serialize;

use crate::analysis::models::{AnalysisResult, CategoryScores};

pub const FULL_MARK: u8 = 100;

/// Score band shown next to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::NeedsImprovement,
        }
    }
}

/// One row of the category breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub subject: &'static str,
    pub score: u8,
    pub full_mark: u8,
}

pub fn category_rows(categories: &CategoryScores) -> Vec<CategoryRow> {
    [
        ("Technical Skills", categories.technical_skills),
        ("Experience", categories.experience),
        ("Education", categories.education),
        ("Keywords", categories.keywords),
        ("Formatting", categories.formatting),
    ]
    .into_iter()
    .map(|(subject, score)| CategoryRow {
        subject,
        score,
        full_mark: FULL_MARK,
    })
    .collect()
}

pub fn completion_summary(result: &AnalysisResult) -> String {
    format!(
        "Your resume scored {}/{FULL_MARK} for ATS compatibility.",
        result.ats_score()
    )
}
