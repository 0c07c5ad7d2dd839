use serde::Serialize;

/// Five category sub-scores, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub technical_skills: u8,
    pub experience: u8,
    pub education: u8,
    pub keywords: u8,
    pub formatting: u8,
}

/// Validated outcome of one analysis call.
///
/// Only `validation::validate_reply` builds one, so a value of this type always
/// satisfies `0 <= ats_score <= 100` and came from a reply that passed the
/// shape checks. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    ats_score: u8,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    recommendations: Vec<String>,
    categories: Option<CategoryScores>,
}

impl AnalysisResult {
    pub(crate) fn new(
        ats_score: u8,
        matched_skills: Vec<String>,
        missing_skills: Vec<String>,
        recommendations: Vec<String>,
        categories: Option<CategoryScores>,
    ) -> Self {
        Self {
            ats_score: ats_score.min(100),
            matched_skills,
            missing_skills,
            recommendations,
            categories,
        }
    }

    pub fn ats_score(&self) -> u8 {
        self.ats_score
    }

    pub fn matched_skills(&self) -> &[String] {
        &self.matched_skills
    }

    pub fn missing_skills(&self) -> &[String] {
        &self.missing_skills
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn categories(&self) -> Option<&CategoryScores> {
        self.categories.as_ref()
    }
}
