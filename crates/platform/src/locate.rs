//! Executable lookup on the current search path

use std::collections::HashMap;
use std::path::PathBuf;

/// Capability to find an executable in the current environment
///
/// This is the one seam between candidate resolution and the operating
/// system. Production code uses [`SystemLocator`]; tests substitute a pinned
/// table of executables.
pub trait ExecutableLocator: Send + Sync {
    /// Absolute path of `program`, or `None` when it is not installed
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Locator backed by the process environment's `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocator;

impl SystemLocator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExecutableLocator for SystemLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// A pinned program table works as a locator; tests use this to fabricate
/// environments without touching the real search path.
impl ExecutableLocator for HashMap<String, PathBuf> {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.get(program).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_locator_finds_a_shell() {
        let locator = SystemLocator::new();
        assert!(locator.locate("sh").is_some());
        assert!(locator.locate("definitely-not-an-installed-program").is_none());
    }

    #[test]
    fn map_locator_serves_pinned_paths() {
        let mut table = HashMap::new();
        table.insert("fceux".to_string(), PathBuf::from("/usr/bin/fceux"));

        assert_eq!(
            table.locate("fceux"),
            Some(PathBuf::from("/usr/bin/fceux"))
        );
        assert_eq!(table.locate("nestopia"), None);
    }
}
