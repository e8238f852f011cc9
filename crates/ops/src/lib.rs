#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! High-level operations orchestration for romrun
//!
//! This crate serves as the orchestration layer between the CLI and
//! specialized crates. Query operations are implemented here, while the
//! launch operation delegates to the resolver and launch crates.

mod context;
mod health;
mod launch;
mod query;
mod types;

pub use context::{OpsContextBuilder, OpsCtx};
pub use health::check_health;
pub use launch::launch;
pub use query::{list_emulators, platforms};
pub use types::{
    ComponentHealth, EmulatorInfo, HealthCheck, HealthIssue, HealthStatus, IssueSeverity,
    PlatformInfo,
};

use romrun_errors::Error;
use romrun_types::LaunchReport;

/// Operation result that can be serialized for CLI output
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationResult {
    /// Launch report
    Report(LaunchReport),
    /// Emulator catalog listing
    EmulatorList(Vec<EmulatorInfo>),
    /// Supported platform listing
    PlatformList(Vec<PlatformInfo>),
    /// Health check results
    HealthCheck(HealthCheck),
}

impl OperationResult {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| {
            romrun_errors::OpsError::SerializationError {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Check if this is a success result
    ///
    /// A launch report that exhausted every candidate is a completed
    /// operation but not a successful one; the process exit code keys off
    /// this.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            OperationResult::Report(report) => report.success,
            OperationResult::EmulatorList(_) | OperationResult::PlatformList(_) => true,
            OperationResult::HealthCheck(health) => health.is_healthy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use romrun_types::Platform;
    use std::path::PathBuf;

    #[test]
    fn result_json_is_tagged_by_operation() {
        let result = OperationResult::Report(LaunchReport {
            rom: PathBuf::from("game.nes"),
            platform: Platform::Nes,
            success: true,
            winner: Some("FCEUX".to_string()),
            attempts: Vec::new(),
            duration_ms: 3,
        });
        let json = result.to_json().unwrap();
        assert!(json.contains("\"type\": \"Report\""));
        assert!(json.contains("\"data\""));
    }

    #[test]
    fn exhausted_reports_are_not_successes() {
        let result = OperationResult::Report(LaunchReport {
            rom: PathBuf::from("game.nes"),
            platform: Platform::Nes,
            success: false,
            winner: None,
            attempts: Vec::new(),
            duration_ms: 3,
        });
        assert!(!result.is_success());
        assert!(OperationResult::PlatformList(Vec::new()).is_success());
    }
}
