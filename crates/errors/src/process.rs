//! Process hosting error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ProcessError {
    #[error("failed to spawn {command}: {message}")]
    SpawnFailed { command: String, message: String },

    #[error("failed waiting on {command}: {message}")]
    WaitFailed { command: String, message: String },

    #[error("executable not found: {program}")]
    NotFound { program: String },
}

impl UserFacingError for ProcessError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::SpawnFailed { .. } | Self::NotFound { .. } => {
                Some("Check that the emulator is installed and executable.")
            }
            Self::WaitFailed { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::WaitFailed { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::SpawnFailed { .. } => "process.spawn_failed",
            Self::WaitFailed { .. } => "process.wait_failed",
            Self::NotFound { .. } => "process.not_found",
        };
        Some(code)
    }
}
