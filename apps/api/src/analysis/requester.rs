//! AnalysisRequester — turns a (job description, resume text) pair into a
//! validated `AnalysisResult` or a classified `AnalysisError`.
//!
//! One backend call per analysis. No retries and no caching: the backend is a
//! generative model, so identical inputs may legitimately score differently.

use std::future::{pending, Future};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::analysis::extract::first_json_object;
use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::validation::validate_reply;
use crate::analysis::AnalysisError;
use crate::llm_client::{LlmError, TextGenerator};

/// Explicit handle to the configured backend, built once at startup.
#[derive(Clone)]
pub struct AnalysisRequester {
    backend: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl AnalysisRequester {
    pub fn new(backend: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub fn backend_label(&self) -> String {
        self.backend.describe()
    }

    /// Runs one analysis with the configured bounded wait.
    ///
    /// Callers are expected to have checked both inputs are non-empty.
    pub async fn analyze(
        &self,
        job_description: &str,
        resume_text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_until(job_description, resume_text, pending::<()>())
            .await
    }

    /// Like `analyze`, but gives up as soon as `cancelled` resolves.
    pub async fn analyze_until<C>(
        &self,
        job_description: &str,
        resume_text: &str,
        cancelled: C,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        C: Future<Output = ()>,
    {
        let span = info_span!("analysis", backend = %self.backend.describe());

        async move {
            let prompt = build_analysis_prompt(job_description, resume_text);
            debug!(
                "Composed analysis prompt: jd_chars={}, resume_chars={}, prompt_chars={}",
                job_description.len(),
                resume_text.len(),
                prompt.len()
            );

            let call = tokio::time::timeout(self.timeout, self.backend.generate(&prompt));

            let generation = tokio::select! {
                outcome = call => match outcome {
                    Ok(Ok(generation)) => generation,
                    Ok(Err(e)) => return Err(classify_backend_error(e)),
                    Err(_) => {
                        warn!("Backend did not answer within {}s", self.timeout.as_secs());
                        return Err(AnalysisError::BackendCall(format!(
                            "no reply within {}s",
                            self.timeout.as_secs()
                        )));
                    }
                },
                _ = cancelled => {
                    info!("Analysis cancelled by caller");
                    return Err(AnalysisError::BackendCall("analysis was cancelled".to_string()));
                }
            };

            if let Some(usage) = generation.usage {
                debug!(
                    "Backend usage: prompt_tokens={}, candidate_tokens={}",
                    usage.prompt_token_count, usage.candidates_token_count
                );
            }

            let result = interpret_reply(&generation.text)?;
            info!(
                "Analysis complete: ats_score={}, matched={}, missing={}, recommendations={}",
                result.ats_score(),
                result.matched_skills().len(),
                result.missing_skills().len(),
                result.recommendations().len()
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }
}

/// Extracts, parses and validates the raw backend text.
pub fn interpret_reply(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let span = first_json_object(text).ok_or_else(|| {
        warn!("Backend reply contains no JSON object ({} chars)", text.len());
        AnalysisError::ResponseFormat("no JSON object found in reply".to_string())
    })?;

    let parsed: Value = serde_json::from_str(span).map_err(|e| {
        warn!("Backend reply JSON did not parse: {e}");
        AnalysisError::ResponseFormat(e.to_string())
    })?;

    validate_reply(&parsed).map_err(|violation| {
        warn!("Backend reply failed validation: {violation}");
        AnalysisError::ResponseShape(violation.to_string())
    })
}

fn classify_backend_error(e: LlmError) -> AnalysisError {
    if e.is_auth_rejection() {
        error!("Backend rejected the configured credential: {e}");
        return AnalysisError::Configuration(e.to_string());
    }
    error!("Backend call failed: {e}");
    AnalysisError::BackendCall(e.to_string())
}
