//! Emulator catalog error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog file not found: {path}")]
    NotFound { path: String },

    #[error("catalog parse error: {message}")]
    ParseError { message: String },

    #[error("duplicate priority {priority} for platform {platform}: {first} and {second}")]
    DuplicatePriority {
        platform: String,
        priority: u32,
        first: String,
        second: String,
    },

    #[error("empty command template for {name} on platform {platform}")]
    EmptyCommand { platform: String, name: String },

    #[error("no emulator named {name} for platform {platform}")]
    UnknownEmulator { platform: String, name: String },
}

impl UserFacingError for CatalogError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Provide a catalog file or remove the override to use the built-in defaults.")
            }
            Self::ParseError { .. } => Some("Fix the catalog TOML and retry the command."),
            Self::DuplicatePriority { .. } => {
                Some("Give each emulator a distinct priority within its platform.")
            }
            Self::EmptyCommand { .. } => {
                Some("Every catalog entry needs a command with at least an executable name.")
            }
            Self::UnknownEmulator { .. } => {
                Some("Run `romrun list` to see the emulators the catalog knows about.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "catalog.not_found",
            Self::ParseError { .. } => "catalog.parse_error",
            Self::DuplicatePriority { .. } => "catalog.duplicate_priority",
            Self::EmptyCommand { .. } => "catalog.empty_command",
            Self::UnknownEmulator { .. } => "catalog.unknown_emulator",
        };
        Some(code)
    }
}
