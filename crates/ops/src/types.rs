//! Types for operations and results

use romrun_types::Platform;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One catalog emulator with its installation status
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmulatorInfo {
    /// Platform the emulator runs
    pub platform: Platform,
    /// Display name
    pub name: String,
    /// Executable name searched on the path
    pub program: String,
    /// Ordering preference, lower tried first
    pub priority: u32,
    /// Whether the executable was found on the search path
    pub installed: bool,
    /// Located absolute path, when installed
    pub executable: Option<PathBuf>,
}

/// One supported platform with its catalog coverage
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Platform identifier
    pub id: String,
    /// Human-readable name
    pub display_name: String,
    /// Recognized file extensions, without leading dots
    pub extensions: Vec<String>,
    /// Catalog entries for the platform
    pub emulators: usize,
    /// Catalog entries whose executable is installed
    pub installed: usize,
}

/// Health check results
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Overall health status
    pub healthy: bool,
    /// Component checks
    pub components: HashMap<String, ComponentHealth>,
    /// Issues found
    pub issues: Vec<HealthIssue>,
}

impl HealthCheck {
    /// Check if every platform has launch coverage
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.healthy
    }
}

/// Component health status
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Health status
    pub status: HealthStatus,
    /// Status message
    pub message: String,
    /// Check duration in milliseconds
    pub check_duration_ms: u64,
}

/// Health status of a single component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Fully covered
    Healthy,
    /// Usable but with reduced fallback depth
    Degraded,
    /// No launch path at all
    Unhealthy,
}

/// Health issue
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthIssue {
    /// Component where issue was found
    pub component: String,
    /// Severity level
    pub severity: IssueSeverity,
    /// Issue description
    pub description: String,
    /// Suggested fix
    pub suggestion: Option<String>,
}

/// Issue severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Low severity
    Low,
    /// Medium severity
    Medium,
    /// High severity
    High,
    /// Critical severity
    Critical,
}
