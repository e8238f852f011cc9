//! Report type definitions for launch requests

use crate::Platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a single launch attempt ended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// Child process exited with code 0
    Success,
    /// Child process exited with a nonzero code
    Exited { code: i32 },
    /// Child process was terminated by a signal before exiting
    Signaled,
    /// Child process could not be started at all
    SpawnFailed { message: String },
}

impl AttemptOutcome {
    /// Whether this attempt counts as a successful launch
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Failure detail, if the attempt failed
    #[must_use]
    pub fn failure_detail(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::Exited { code } => Some(format!("exited with code {code}")),
            Self::Signaled => Some("terminated by signal".to_string()),
            Self::SpawnFailed { message } => Some(message.clone()),
        }
    }
}

/// One candidate tried by the supervisor
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaunchAttempt {
    /// Emulator display name
    pub emulator: String,
    /// Full command line that was (or would have been) spawned
    pub command: Vec<String>,
    /// How the attempt ended
    pub outcome: AttemptOutcome,
}

/// Launch report
///
/// Exactly one report is produced per launch request; it is never mutated
/// after being returned. A failed launch still carries the full attempt
/// trail for diagnosis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaunchReport {
    /// ROM path the request was made for
    pub rom: PathBuf,
    /// Platform the ROM was detected as
    pub platform: Platform,
    /// Whether any candidate ran to a clean exit
    pub success: bool,
    /// Display name of the winning emulator, on success
    pub winner: Option<String>,
    /// Every attempt made, in resolution order
    pub attempts: Vec<LaunchAttempt>,
    /// Total execution time
    pub duration_ms: u64,
}

impl LaunchReport {
    /// Number of attempts that failed
    #[must_use]
    pub fn failed_attempts(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| !a.outcome.is_success())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_success_flag() {
        assert!(AttemptOutcome::Success.is_success());
        assert!(!AttemptOutcome::Exited { code: 1 }.is_success());
        assert!(!AttemptOutcome::Signaled.is_success());
        assert!(!AttemptOutcome::SpawnFailed {
            message: "missing".into()
        }
        .is_success());
    }

    #[test]
    fn failure_detail_describes_the_exit() {
        assert_eq!(AttemptOutcome::Success.failure_detail(), None);
        assert_eq!(
            AttemptOutcome::Exited { code: 127 }.failure_detail().as_deref(),
            Some("exited with code 127")
        );
    }

    #[test]
    fn failed_attempt_count_ignores_the_winner() {
        let report = LaunchReport {
            rom: PathBuf::from("game.nes"),
            platform: Platform::Nes,
            success: true,
            winner: Some("FCEUX".into()),
            attempts: vec![
                LaunchAttempt {
                    emulator: "Nestopia".into(),
                    command: vec!["nestopia".into(), "game.nes".into()],
                    outcome: AttemptOutcome::Exited { code: 1 },
                },
                LaunchAttempt {
                    emulator: "FCEUX".into(),
                    command: vec!["fceux".into(), "game.nes".into()],
                    outcome: AttemptOutcome::Success,
                },
            ],
            duration_ms: 12,
        };
        assert_eq!(report.failed_attempts(), 1);
    }
}
