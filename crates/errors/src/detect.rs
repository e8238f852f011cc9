//! Platform detection error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DetectError {
    #[error("unknown platform: extension .{extension} is not in the supported set")]
    UnknownPlatform { extension: String },

    #[error("unknown platform: {path} has no file extension")]
    NoExtension { path: String },

    #[error("unknown platform name: {name}")]
    UnknownName { name: String },
}

impl UserFacingError for DetectError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownPlatform { .. } | Self::NoExtension { .. } => Some(
                "Supported extensions: .nes, .smc, .sfc, .gb, .gba, .md, .gen, .bin.",
            ),
            Self::UnknownName { .. } => {
                Some("Known platforms: nes, snes, gameboy, gba, genesis.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::UnknownPlatform { .. } => "detect.unknown_platform",
            Self::NoExtension { .. } => "detect.no_extension",
            Self::UnknownName { .. } => "detect.unknown_name",
        };
        Some(code)
    }
}
