//! ROM launch operation

use crate::OpsCtx;
use romrun_errors::Error;
use romrun_events::{AppEvent, EventEmitter, FailureContext, LaunchEvent};
use romrun_resolver::ResolvedCandidate;
use romrun_types::{LaunchPhase, LaunchReport, Platform};
use std::path::Path;
use tracing::{debug, info};

/// Launch a ROM, trying installed emulators in priority order
///
/// Detects the platform from the ROM's extension, resolves installed
/// candidates, then hands the ordered list to the supervisor. Restricting
/// to `emulator` narrows resolution to that single catalog entry.
///
/// # Errors
///
/// Returns an error if the extension maps to no platform, if a requested
/// emulator name is not in the catalog, or if no installed emulator exists
/// for the platform. Failed attempts are not errors; they come back inside
/// the report.
pub async fn launch(
    ctx: &OpsCtx,
    rom: &Path,
    emulator: Option<&str>,
) -> Result<LaunchReport, Error> {
    ctx.emit_operation_started("launch");

    match run(ctx, rom, emulator).await {
        Ok(report) => {
            ctx.emit_operation_completed("launch", report.success);
            Ok(report)
        }
        Err(error) => {
            ctx.emit(AppEvent::Launch(LaunchEvent::failed(
                FailureContext::from_error(&error),
            )));
            ctx.emit_operation_failed("launch", error.to_string());
            Err(error)
        }
    }
}

async fn run(ctx: &OpsCtx, rom: &Path, emulator: Option<&str>) -> Result<LaunchReport, Error> {
    ctx.emit_phase_changed(LaunchPhase::Detecting);
    let platform = Platform::from_path(rom)?;
    info!(rom = %rom.display(), platform = %platform, "detected platform");

    ctx.emit_phase_changed(LaunchPhase::Resolving);
    let resolver = ctx.resolver();
    let candidates: Vec<ResolvedCandidate> = match emulator {
        Some(name) => resolver.resolve_named(platform, name)?,
        None => resolver.resolve(platform),
    };
    debug!(candidates = candidates.len(), "resolution finished");

    ctx.supervisor().supervise(rom, platform, &candidates).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsContextBuilder;
    use async_trait::async_trait;
    use romrun_catalog::{CatalogDocument, DescriptorEntry, EmulatorCatalog};
    use romrun_config::Config;
    use romrun_errors::Error;
    use romrun_platform::{ChildExit, CommandSpec, ProcessHost};
    use romrun_types::AttemptOutcome;
    use std::collections::{HashMap, VecDeque};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct ScriptedHost {
        script: Mutex<VecDeque<Result<ChildExit, Error>>>,
        calls: Mutex<Vec<CommandSpec>>,
    }

    impl ScriptedHost {
        fn new(script: Vec<Result<ChildExit, Error>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ProcessHost for ScriptedHost {
        async fn run_to_exit(&self, spec: &CommandSpec) -> Result<ChildExit, Error> {
            self.calls.lock().unwrap().push(spec.clone());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted")
        }
    }

    fn entry(name: &str, program: &str, priority: u32) -> DescriptorEntry {
        DescriptorEntry {
            name: name.to_string(),
            command: vec![program.to_string(), "{rom}".to_string()],
            priority,
        }
    }

    fn test_catalog() -> EmulatorCatalog {
        let document = CatalogDocument {
            platform: HashMap::from([(
                "nes".to_string(),
                vec![
                    entry("Fourth", "fourth-emu", 4),
                    entry("First", "first-emu", 1),
                ],
            )]),
        };
        EmulatorCatalog::from_document(document).unwrap()
    }

    fn env_with(programs: &[&str]) -> Arc<HashMap<String, PathBuf>> {
        Arc::new(
            programs
                .iter()
                .map(|p| (p.to_string(), PathBuf::from(format!("/usr/bin/{p}"))))
                .collect(),
        )
    }

    fn ctx_with(
        catalog: EmulatorCatalog,
        locator: Arc<HashMap<String, PathBuf>>,
        host: Arc<ScriptedHost>,
    ) -> OpsCtx {
        let (tx, _rx) = romrun_events::channel();
        OpsContextBuilder::new()
            .with_catalog(catalog)
            .with_locator(locator)
            .with_host(host)
            .with_event_sender(tx)
            .with_config(Config::default())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn an_unknown_extension_fails_before_any_resolution() {
        let host = ScriptedHost::new(vec![]);
        let ctx = ctx_with(test_catalog(), env_with(&["first-emu"]), host.clone());

        let err = launch(&ctx, Path::new("/roms/game.xyz"), None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unknown platform"));
        assert!(host.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn an_uncovered_platform_is_reported_without_attempts() {
        let host = ScriptedHost::new(vec![]);
        let ctx = ctx_with(test_catalog(), env_with(&[]), host.clone());

        let err = launch(&ctx, Path::new("/roms/game.nes"), None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no emulator available"));
        assert!(host.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fallback_walks_the_priority_order() {
        let host = ScriptedHost::new(vec![
            Ok(ChildExit::with_code(1)),
            Ok(ChildExit::with_code(0)),
        ]);
        let ctx = ctx_with(
            test_catalog(),
            env_with(&["first-emu", "fourth-emu"]),
            host,
        );

        let report = launch(&ctx, Path::new("/roms/game.nes"), None)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.attempts.len(), 2);
        assert_eq!(report.attempts[0].emulator, "First");
        assert_eq!(report.attempts[1].emulator, "Fourth");
        assert_eq!(report.winner.as_deref(), Some("Fourth"));
        assert_eq!(
            report.attempts[0].outcome,
            AttemptOutcome::Exited { code: 1 }
        );
    }

    #[tokio::test]
    async fn restricting_to_a_named_emulator_skips_the_rest() {
        let host = ScriptedHost::new(vec![Ok(ChildExit::with_code(0))]);
        let ctx = ctx_with(
            test_catalog(),
            env_with(&["first-emu", "fourth-emu"]),
            host.clone(),
        );

        let report = launch(&ctx, Path::new("/roms/game.nes"), Some("Fourth"))
            .await
            .unwrap();

        assert_eq!(report.attempts.len(), 1);
        assert_eq!(report.winner.as_deref(), Some("Fourth"));
    }

    #[tokio::test]
    async fn restricting_to_an_unknown_name_is_a_catalog_error() {
        let host = ScriptedHost::new(vec![]);
        let ctx = ctx_with(test_catalog(), env_with(&["first-emu"]), host);

        let err = launch(&ctx, Path::new("/roms/game.nes"), Some("zsnes"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no emulator named zsnes"));
    }
}
