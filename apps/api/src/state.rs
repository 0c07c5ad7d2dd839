use std::sync::Arc;

use crate::analysis::session::AnalysisSession;
use crate::analysis::AnalysisRequester;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub requester: AnalysisRequester,
    /// Single current-result slot plus the in-flight guard.
    pub session: Arc<AnalysisSession>,
}

impl AppState {
    pub fn new(requester: AnalysisRequester) -> Self {
        Self {
            requester,
            session: AnalysisSession::new(),
        }
    }
}
