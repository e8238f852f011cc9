//! Launch supervision error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum LaunchError {
    #[error("no emulator available for platform {platform}")]
    NoEmulatorAvailable { platform: String },
}

impl UserFacingError for LaunchError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NoEmulatorAvailable { .. } => Some(
                "Install one of the emulators listed by `romrun list` and make sure it is on PATH.",
            ),
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NoEmulatorAvailable { .. } => "launch.no_emulator_available",
        };
        Some(code)
    }
}
