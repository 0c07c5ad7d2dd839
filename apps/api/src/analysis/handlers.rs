//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::analysis::input::{has_required_inputs, inspect_job_description, JobDescriptionGuidance};
use crate::analysis::models::AnalysisResult;
use crate::analysis::report::{category_rows, completion_summary, CategoryRow, ScoreBand};
use crate::analysis::samples::SAMPLE_JOB_DESCRIPTION;
use crate::analysis::session::{CompletedAnalysis, SessionPhase};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub request_id: Uuid,
    pub result: AnalysisResult,
    pub score_label: ScoreBand,
    pub summary: String,
    pub categories: Option<Vec<CategoryRow>>,
    pub analyzed_at: DateTime<Utc>,
}

impl From<&CompletedAnalysis> for AnalysisResponse {
    fn from(completed: &CompletedAnalysis) -> Self {
        let result = &completed.result;
        Self {
            request_id: completed.request_id,
            result: result.clone(),
            score_label: ScoreBand::for_score(result.ats_score()),
            summary: completion_summary(result),
            categories: result.categories().map(category_rows),
            analyzed_at: completed.analyzed_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub phase: SessionPhase,
    pub has_result: bool,
}

#[derive(Debug, Deserialize)]
pub struct InspectRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub job_description: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Scores a resume against a job description. One analysis may be in flight
/// at a time; the successful result replaces the current one.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    if !has_required_inputs(&request.job_description, &request.resume_text) {
        return Err(AppError::Validation(
            "Please provide both job description and resume before analyzing.".to_string(),
        ));
    }

    let request_id = Uuid::new_v4();
    let in_flight = state.session.try_begin(request_id).ok_or_else(|| {
        AppError::Conflict("An analysis is already in progress. Please wait for it to finish.".to_string())
    })?;

    let outcome = state
        .requester
        .analyze(&request.job_description, &request.resume_text)
        .instrument(info_span!("analysis_request", %request_id))
        .await;

    match outcome {
        Ok(result) => {
            let completed = in_flight.complete(result);
            Ok(Json(AnalysisResponse::from(completed.as_ref())))
        }
        Err(e) => {
            in_flight.fail();
            Err(e.into())
        }
    }
}

/// GET /api/v1/analysis/current
///
/// Returns the most recent successful analysis, if any.
pub async fn handle_current(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let current = state
        .session
        .current()
        .ok_or_else(|| AppError::NotFound("No analysis has completed yet".to_string()))?;

    Ok(Json(AnalysisResponse::from(current.as_ref())))
}

/// GET /api/v1/analysis/status
///
/// Lets the UI disable re-triggering while an analysis is in flight.
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        phase: state.session.phase(),
        has_result: state.session.current().is_some(),
    })
}

/// POST /api/v1/job-description/inspect
pub async fn handle_inspect(Json(request): Json<InspectRequest>) -> Json<JobDescriptionGuidance> {
    Json(inspect_job_description(&request.job_description))
}

/// GET /api/v1/samples/job-description
pub async fn handle_sample() -> Json<SampleResponse> {
    Json(SampleResponse {
        job_description: SAMPLE_JOB_DESCRIPTION,
    })
}
