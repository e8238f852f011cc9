//! Launch coverage health checks

use crate::{ComponentHealth, HealthCheck, HealthIssue, HealthStatus, IssueSeverity, OpsCtx};
use romrun_events::EventEmitter;
use romrun_types::Platform;
use std::collections::HashMap;
use std::time::Instant;

/// Check launch coverage for every supported platform
///
/// A platform is healthy when at least one catalog emulator is installed,
/// degraded when it has coverage but some catalog entries are missing, and
/// unhealthy when a ROM for it could not be launched at all.
#[must_use]
pub fn check_health(ctx: &OpsCtx) -> HealthCheck {
    ctx.emit_operation_started("check-health");

    let mut components = HashMap::new();
    let mut issues = Vec::new();
    let mut overall_healthy = true;

    for platform in Platform::ALL {
        let check_start = Instant::now();
        let descriptors = ctx.catalog.descriptors_for(platform);
        let missing: Vec<&str> = descriptors
            .iter()
            .filter(|d| ctx.locator.locate(d.program()).is_none())
            .map(|d| d.name.as_str())
            .collect();
        let installed = descriptors.len() - missing.len();

        let status = if descriptors.is_empty() || installed == 0 {
            overall_healthy = false;
            HealthStatus::Unhealthy
        } else if missing.is_empty() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };

        if status == HealthStatus::Unhealthy {
            // Suggest the preferred emulator first, it is the one the
            // launch chain would pick.
            let suggestion = descriptors
                .first()
                .map(|d| format!("install {} ({})", d.name, d.program()));
            issues.push(HealthIssue {
                component: platform.id().to_string(),
                severity: IssueSeverity::High,
                description: format!(
                    "no installed emulator for {}; launches will fail",
                    platform.display_name()
                ),
                suggestion,
            });
        }

        components.insert(
            platform.id().to_string(),
            ComponentHealth {
                name: platform.display_name().to_string(),
                status,
                message: format!(
                    "{installed} of {} catalog emulators installed",
                    descriptors.len()
                ),
                check_duration_ms: u64::try_from(check_start.elapsed().as_millis())
                    .unwrap_or(u64::MAX),
            },
        );
    }

    ctx.emit_operation_completed("check-health", overall_healthy);

    HealthCheck {
        healthy: overall_healthy,
        components,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsContextBuilder;
    use romrun_catalog::EmulatorCatalog;
    use romrun_config::Config;
    use romrun_platform::SystemHost;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn ctx_with_env(programs: &[&str]) -> OpsCtx {
        let locator: HashMap<String, PathBuf> = programs
            .iter()
            .map(|p| (p.to_string(), PathBuf::from(format!("/usr/bin/{p}"))))
            .collect();
        let (tx, _rx) = romrun_events::channel();
        OpsContextBuilder::new()
            .with_catalog(EmulatorCatalog::builtin())
            .with_locator(Arc::new(locator))
            .with_host(Arc::new(SystemHost))
            .with_event_sender(tx)
            .with_config(Config::default())
            .build()
            .unwrap()
    }

    #[test]
    fn bare_environments_are_unhealthy_everywhere() {
        let ctx = ctx_with_env(&[]);
        let health = check_health(&ctx);

        assert!(!health.is_healthy());
        assert_eq!(health.issues.len(), Platform::ALL.len());
        let nes = health.issues.iter().find(|i| i.component == "nes").unwrap();
        assert!(nes.suggestion.as_deref().unwrap().contains("Nestopia"));
    }

    #[test]
    fn partial_coverage_is_degraded_not_unhealthy() {
        let ctx = ctx_with_env(&["fceux", "snes9x", "gambatte", "mgba", "blastem"]);
        let health = check_health(&ctx);

        let nes = &health.components["nes"];
        assert_eq!(nes.status, HealthStatus::Degraded);
        assert!(nes.message.starts_with("1 of"));
        // genesis has no installed emulator in this environment
        assert!(!health.is_healthy());
        assert_eq!(health.issues.len(), 1);
        assert_eq!(health.issues[0].component, "genesis");
    }
}
