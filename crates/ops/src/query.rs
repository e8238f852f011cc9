//! Catalog and platform query operations

use crate::{EmulatorInfo, OpsCtx, PlatformInfo};
use romrun_types::Platform;

/// List catalog emulators with their installation status
///
/// Entries come back grouped by platform in catalog priority order. A
/// `platform` filter narrows the listing to one platform's table.
#[must_use]
pub fn list_emulators(ctx: &OpsCtx, platform: Option<Platform>) -> Vec<EmulatorInfo> {
    let platforms: Vec<Platform> = match platform {
        Some(p) => vec![p],
        None => Platform::ALL.to_vec(),
    };

    let mut infos = Vec::new();
    for platform in platforms {
        for descriptor in ctx.catalog.descriptors_for(platform) {
            let executable = ctx.locator.locate(descriptor.program());
            infos.push(EmulatorInfo {
                platform,
                name: descriptor.name.clone(),
                program: descriptor.program().to_string(),
                priority: descriptor.priority,
                installed: executable.is_some(),
                executable,
            });
        }
    }
    infos
}

/// List supported platforms with extensions and catalog coverage
#[must_use]
pub fn platforms(ctx: &OpsCtx) -> Vec<PlatformInfo> {
    Platform::ALL
        .iter()
        .map(|&platform| {
            let descriptors = ctx.catalog.descriptors_for(platform);
            let installed = descriptors
                .iter()
                .filter(|d| ctx.locator.locate(d.program()).is_some())
                .count();
            PlatformInfo {
                id: platform.id().to_string(),
                display_name: platform.display_name().to_string(),
                extensions: platform
                    .extensions()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                emulators: descriptors.len(),
                installed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsContextBuilder;
    use romrun_catalog::EmulatorCatalog;
    use romrun_config::Config;
    use romrun_platform::SystemHost;
    use std::collections::HashMap;
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
    fn listing_marks_installed_entries() {
        let ctx = ctx_with_env(&["fceux"]);
        let infos = list_emulators(&ctx, Some(Platform::Nes));

        let fceux = infos.iter().find(|i| i.name == "FCEUX").unwrap();
        assert!(fceux.installed);
        assert_eq!(
            fceux.executable.as_deref(),
            Some(PathBuf::from("/usr/bin/fceux").as_path())
        );
        assert!(infos.iter().filter(|i| i.installed).count() == 1);
    }

    #[test]
    fn listing_without_a_filter_covers_every_platform() {
        let ctx = ctx_with_env(&[]);
        let infos = list_emulators(&ctx, None);
        for platform in Platform::ALL {
            assert!(infos.iter().any(|i| i.platform == platform));
        }
    }

    #[test]
    fn platform_listing_reports_extensions_and_coverage() {
        let ctx = ctx_with_env(&["snes9x"]);
        let listing = platforms(&ctx);

        assert_eq!(listing.len(), Platform::ALL.len());
        let snes = listing.iter().find(|p| p.id == "snes").unwrap();
        assert_eq!(snes.extensions, vec!["smc", "sfc"]);
        assert_eq!(snes.installed, 1);
        assert!(snes.emulators >= snes.installed);
    }
}
