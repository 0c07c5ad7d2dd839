//! Single-slot holder for the current analysis.
//!
//! Exactly one "current" result exists at a time; a new success overwrites it
//! and nothing older is kept. Only one analysis may be in flight: starting a
//! second while the first is outstanding is refused instead of queued.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    InFlight,
    Done,
    Failed,
}

/// A successful analysis as held in the slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedAnalysis {
    pub request_id: Uuid,
    pub result: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug)]
struct SlotState {
    phase: SessionPhase,
    current: Option<Arc<CompletedAnalysis>>,
}

#[derive(Debug)]
pub struct AnalysisSession {
    state: Mutex<SlotState>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self {
            state: Mutex::new(SlotState {
                phase: SessionPhase::Idle,
                current: None,
            }),
        }
    }
}

impl AnalysisSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks an analysis as in flight. Returns `None` if one already is.
    pub fn try_begin(self: &Arc<Self>, request_id: Uuid) -> Option<InFlight> {
        let mut state = self.lock();
        if state.phase == SessionPhase::InFlight {
            return None;
        }
        state.phase = SessionPhase::InFlight;
        Some(InFlight {
            session: Arc::clone(self),
            request_id,
            settled: false,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock().phase
    }

    pub fn current(&self) -> Option<Arc<CompletedAnalysis>> {
        self.lock().current.clone()
    }
}

/// Proof that this caller owns the in-flight slot. Dropping it unsettled
/// (e.g. the request was abandoned) frees the slot again.
#[derive(Debug)]
pub struct InFlight {
    session: Arc<AnalysisSession>,
    request_id: Uuid,
    settled: bool,
}

impl InFlight {
    /// Stores `result` as the new current analysis.
    pub fn complete(mut self, result: AnalysisResult) -> Arc<CompletedAnalysis> {
        let completed = Arc::new(CompletedAnalysis {
            request_id: self.request_id,
            result,
            analyzed_at: Utc::now(),
        });
        let mut state = self.session.lock();
        state.phase = SessionPhase::Done;
        state.current = Some(Arc::clone(&completed));
        drop(state);
        self.settled = true;
        completed
    }

    /// Records a failure. The previous result, if any, stays current.
    pub fn fail(mut self) {
        self.session.lock().phase = SessionPhase::Failed;
        self.settled = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.session.lock();
        state.phase = if state.current.is_some() {
            SessionPhase::Done
        } else {
            SessionPhase::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u8) -> AnalysisResult {
        AnalysisResult::new(score, vec!["Rust".to_string()], vec![], vec![], None)
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let session = AnalysisSession::new();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_second_begin_refused_while_in_flight() {
        let session = AnalysisSession::new();
        let first = session.try_begin(Uuid::new_v4()).unwrap();
        assert_eq!(session.phase(), SessionPhase::InFlight);
        assert!(session.try_begin(Uuid::new_v4()).is_none());
        first.fail();
        assert!(session.try_begin(Uuid::new_v4()).is_some());
    }

    #[test]
    fn test_new_result_overwrites_single_slot() {
        let session = AnalysisSession::new();
        let first_id = Uuid::new_v4();
        session.try_begin(first_id).unwrap().complete(result(40));
        let second_id = Uuid::new_v4();
        session.try_begin(second_id).unwrap().complete(result(85));

        let current = session.current().unwrap();
        assert_eq!(current.request_id, second_id);
        assert_eq!(current.result.ats_score(), 85);
        assert_eq!(session.phase(), SessionPhase::Done);
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let session = AnalysisSession::new();
        session.try_begin(Uuid::new_v4()).unwrap().complete(result(61));
        session.try_begin(Uuid::new_v4()).unwrap().fail();

        assert_eq!(session.phase(), SessionPhase::Failed);
        assert_eq!(session.current().unwrap().result.ats_score(), 61);
    }

    #[test]
    fn test_dropped_guard_frees_slot() {
        let session = AnalysisSession::new();
        {
            let _guard = session.try_begin(Uuid::new_v4()).unwrap();
        }
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.try_begin(Uuid::new_v4()).is_some());
    }
}
