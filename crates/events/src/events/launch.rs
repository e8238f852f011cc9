use romrun_types::LaunchPhase;
use serde::{Deserialize, Serialize};

/// Launch supervision events (phase transitions and attempt outcomes)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LaunchEvent {
    /// The pipeline moved to a new phase
    PhaseChanged { phase: LaunchPhase },

    /// One candidate is about to be spawned
    AttemptStarted {
        index: usize,
        total: usize,
        emulator: String,
        command: Vec<String>,
    },

    /// One candidate finished, by exiting or by failing to spawn
    AttemptCompleted {
        index: usize,
        emulator: String,
        success: bool,
        detail: Option<String>,
    },

    /// The whole request finished
    Completed {
        success: bool,
        winner: Option<String>,
        attempts: usize,
    },

    /// The request died before producing a report
    Failed { failure: super::FailureContext },
}

impl LaunchEvent {
    /// Create an attempt started event
    pub fn attempt_started(
        index: usize,
        total: usize,
        emulator: impl Into<String>,
        command: Vec<String>,
    ) -> Self {
        Self::AttemptStarted {
            index,
            total,
            emulator: emulator.into(),
            command,
        }
    }

    /// Create an attempt completed event
    pub fn attempt_completed(
        index: usize,
        emulator: impl Into<String>,
        success: bool,
        detail: Option<String>,
    ) -> Self {
        Self::AttemptCompleted {
            index,
            emulator: emulator.into(),
            success,
            detail,
        }
    }

    /// Create a failed event from error details
    #[must_use]
    pub fn failed(failure: super::FailureContext) -> Self {
        Self::Failed { failure }
    }
}
