// Resume-to-job-match analysis.
// Implements: prompt composition, JSON span extraction, reply validation,
// the requester itself, and the display helpers consumed by the HTTP layer.
// All backend calls go through llm_client — no direct Gemini calls here.

pub mod extract;
pub mod handlers;
pub mod input;
pub mod models;
pub mod prompts;
pub mod report;
pub mod requester;
pub mod samples;
pub mod session;
pub mod validation;

use thiserror::Error;

pub use requester::AnalysisRequester;

/// Failure classes surfaced by an analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Backend credential or endpoint missing or rejected. Fatal to the feature.
    #[error("Analysis backend is not configured: {0}")]
    Configuration(String),

    #[error("Invalid response format from analysis backend: {0}")]
    ResponseFormat(String),

    #[error("Invalid analysis data structure: {0}")]
    ResponseShape(String),

    #[error("Failed to analyze resume. Please check your connection and try again. ({0})")]
    BackendCall(String),
}
