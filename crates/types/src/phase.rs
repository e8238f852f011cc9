//! Launch pipeline phase tracking

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a launch request currently stands
///
/// Phases only move forward: `Idle → Detecting → Resolving → Attempting(i)`,
/// then either `Success` or on to `Attempting(i + 1)` until the candidate
/// list runs out and the phase lands on `ExhaustedFailure`. A detection
/// failure ends the request while still in `Detecting`; nothing is resolved
/// or attempted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchPhase {
    Idle,
    Detecting,
    Resolving,
    Attempting { index: usize },
    Success,
    ExhaustedFailure,
}

impl LaunchPhase {
    /// Whether this phase ends the request
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::ExhaustedFailure)
    }
}

impl fmt::Display for LaunchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Detecting => f.write_str("detecting"),
            Self::Resolving => f.write_str("resolving"),
            Self::Attempting { index } => write!(f, "attempting({index})"),
            Self::Success => f.write_str("success"),
            Self::ExhaustedFailure => f.write_str("exhausted-failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_outcome_phases_are_terminal() {
        assert!(LaunchPhase::Success.is_terminal());
        assert!(LaunchPhase::ExhaustedFailure.is_terminal());
        assert!(!LaunchPhase::Idle.is_terminal());
        assert!(!LaunchPhase::Attempting { index: 3 }.is_terminal());
    }

    #[test]
    fn display_includes_attempt_index() {
        assert_eq!(LaunchPhase::Attempting { index: 2 }.to_string(), "attempting(2)");
        assert_eq!(LaunchPhase::Resolving.to_string(), "resolving");
    }
}
