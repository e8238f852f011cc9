//! Main emulator resolver implementation

use crate::ResolvedCandidate;
use romrun_catalog::EmulatorCatalog;
use romrun_errors::Error;
use romrun_events::{AppEvent, EventEmitter, EventSender, ResolverEvent};
use romrun_platform::ExecutableLocator;
use romrun_types::Platform;
use std::sync::Arc;
use tracing::debug;

/// Emulator resolver
///
/// Combines the injected catalog with live environment probing. The catalog
/// is configuration handed in at construction, never global state, so tests
/// can fabricate both the table and the environment.
#[derive(Clone)]
pub struct EmulatorResolver {
    /// Emulator registry
    catalog: EmulatorCatalog,
    /// Search-path probe
    locator: Arc<dyn ExecutableLocator>,
    /// Optional progress event channel
    tx: Option<EventSender>,
}

impl EmulatorResolver {
    /// Create a new resolver over a catalog and an executable locator
    #[must_use]
    pub fn new(catalog: EmulatorCatalog, locator: Arc<dyn ExecutableLocator>) -> Self {
        Self {
            catalog,
            locator,
            tx: None,
        }
    }

    /// Attach an event channel for resolution progress
    #[must_use]
    pub fn with_events(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Ordered, installed candidates for a platform
    ///
    /// Descriptors whose executable cannot be located are dropped silently,
    /// logged at debug level only. Survivors are sorted ascending by
    /// priority with catalog declaration order breaking ties. An empty list
    /// means no emulator for the platform is installed, which is not an
    /// error here; it is distinguished from an unknown platform, which never
    /// reaches the resolver.
    #[must_use]
    pub fn resolve(&self, platform: Platform) -> Vec<ResolvedCandidate> {
        let descriptors = self.catalog.descriptors_for(platform);
        self.emit(AppEvent::Resolver(ResolverEvent::started(
            platform.to_string(),
            descriptors.len(),
        )));

        let mut candidates = Vec::new();
        for descriptor in descriptors {
            match self.locator.locate(descriptor.program()) {
                Some(executable) => {
                    debug!(
                        emulator = %descriptor.name,
                        executable = %executable.display(),
                        "located candidate"
                    );
                    self.emit(AppEvent::Resolver(ResolverEvent::CandidateLocated {
                        emulator: descriptor.name.clone(),
                        executable: executable.clone(),
                        priority: descriptor.priority,
                    }));
                    candidates.push(ResolvedCandidate::new(descriptor.clone(), executable));
                }
                None => {
                    debug!(
                        emulator = %descriptor.name,
                        program = descriptor.program(),
                        "executable not on search path, dropping candidate"
                    );
                    self.emit(AppEvent::Resolver(ResolverEvent::CandidateSkipped {
                        emulator: descriptor.name.clone(),
                        program: descriptor.program().to_string(),
                    }));
                }
            }
        }

        candidates.sort_by_key(ResolvedCandidate::priority);

        self.emit(AppEvent::Resolver(ResolverEvent::completed(
            platform.to_string(),
            candidates.len(),
        )));
        candidates
    }

    /// Resolve only the named emulator for a platform
    ///
    /// Restricting to a name the catalog does not know is an error; a known
    /// name whose executable is not installed yields an empty list, same as
    /// an empty environment does.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownEmulator` when the platform's table has
    /// no entry with that name.
    pub fn resolve_named(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<Vec<ResolvedCandidate>, Error> {
        let descriptor = self.catalog.descriptor_named(platform, name)?;

        let candidates = match self.locator.locate(descriptor.program()) {
            Some(executable) => {
                self.emit(AppEvent::Resolver(ResolverEvent::CandidateLocated {
                    emulator: descriptor.name.clone(),
                    executable: executable.clone(),
                    priority: descriptor.priority,
                }));
                vec![ResolvedCandidate::new(descriptor.clone(), executable)]
            }
            None => {
                debug!(
                    emulator = %descriptor.name,
                    program = descriptor.program(),
                    "requested emulator not on search path"
                );
                self.emit(AppEvent::Resolver(ResolverEvent::CandidateSkipped {
                    emulator: descriptor.name.clone(),
                    program: descriptor.program().to_string(),
                }));
                Vec::new()
            }
        };
        Ok(candidates)
    }

    /// The catalog this resolver was built over
    #[must_use]
    pub fn catalog(&self) -> &EmulatorCatalog {
        &self.catalog
    }
}

impl EventEmitter for EmulatorResolver {
    fn event_sender(&self) -> Option<&EventSender> {
        self.tx.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use romrun_catalog::{CatalogDocument, DescriptorEntry};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn entry(name: &str, program: &str, priority: u32) -> DescriptorEntry {
        DescriptorEntry {
            name: name.to_string(),
            command: vec![program.to_string(), "{rom}".to_string()],
            priority,
        }
    }

    fn catalog_for(platform_key: &str, entries: Vec<DescriptorEntry>) -> EmulatorCatalog {
        let document = CatalogDocument {
            platform: HashMap::from([(platform_key.to_string(), entries)]),
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

    #[test]
    fn only_locatable_candidates_survive() {
        let catalog = catalog_for(
            "nes",
            vec![
                entry("First", "first-emu", 1),
                entry("Second", "second-emu", 2),
                entry("Third", "third-emu", 3),
            ],
        );
        let resolver = EmulatorResolver::new(catalog, env_with(&["second-emu"]));

        let candidates = resolver.resolve(Platform::Nes);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name(), "Second");
        assert_eq!(candidates[0].executable, PathBuf::from("/usr/bin/second-emu"));
    }

    #[test]
    fn empty_environment_yields_an_empty_list() {
        let catalog = catalog_for("snes", vec![entry("Snes9x", "snes9x", 1)]);
        let resolver = EmulatorResolver::new(catalog, env_with(&[]));
        assert!(resolver.resolve(Platform::Snes).is_empty());
    }

    #[test]
    fn resolution_is_deterministic_for_an_unchanged_environment() {
        let catalog = catalog_for(
            "gba",
            vec![
                entry("B", "b-emu", 2),
                entry("A", "a-emu", 1),
                entry("C", "c-emu", 3),
            ],
        );
        let resolver =
            EmulatorResolver::new(catalog, env_with(&["a-emu", "b-emu", "c-emu"]));

        let first = resolver.resolve(Platform::Gba);
        let second = resolver.resolve(Platform::Gba);
        assert_eq!(first, second);
    }

    #[test]
    fn named_resolution_rejects_unknown_emulators() {
        let catalog = catalog_for("nes", vec![entry("Nestopia", "nestopia", 1)]);
        let resolver = EmulatorResolver::new(catalog, env_with(&["nestopia"]));

        let err = resolver.resolve_named(Platform::Nes, "zsnes").unwrap_err();
        assert!(err.to_string().contains("no emulator named zsnes"));
    }

    #[test]
    fn named_resolution_of_an_uninstalled_emulator_is_empty_not_an_error() {
        let catalog = catalog_for(
            "nes",
            vec![entry("Nestopia", "nestopia", 1), entry("FCEUX", "fceux", 2)],
        );
        let resolver = EmulatorResolver::new(catalog, env_with(&["nestopia"]));

        let candidates = resolver.resolve_named(Platform::Nes, "fceux").unwrap();
        assert!(candidates.is_empty());

        let candidates = resolver.resolve_named(Platform::Nes, "NESTOPIA").unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn resolution_emits_progress_events() {
        let catalog = catalog_for(
            "nes",
            vec![entry("Found", "found", 1), entry("Missing", "missing", 2)],
        );
        let (tx, mut rx) = romrun_events::channel();
        let resolver =
            EmulatorResolver::new(catalog, env_with(&["found"])).with_events(tx);

        resolver.resolve(Platform::Nes);

        let mut kinds = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let AppEvent::Resolver(event) = event {
                kinds.push(match event {
                    ResolverEvent::Started { .. } => "started",
                    ResolverEvent::CandidateLocated { .. } => "located",
                    ResolverEvent::CandidateSkipped { .. } => "skipped",
                    ResolverEvent::Completed { .. } => "completed",
                });
            }
        }
        assert_eq!(kinds, vec!["started", "located", "skipped", "completed"]);
    }

    proptest! {
        #[test]
        fn output_is_priority_sorted_for_any_declaration_order(
            order in Just(vec![
                ("Nine", "nine-emu", 9_u32),
                ("One", "one-emu", 1),
                ("Five", "five-emu", 5),
                ("Three", "three-emu", 3),
            ])
            .prop_shuffle()
        ) {
            let entries = order
                .iter()
                .map(|(name, program, priority)| entry(name, program, *priority))
                .collect();
            let catalog = catalog_for("genesis", entries);
            let resolver = EmulatorResolver::new(
                catalog,
                env_with(&["nine-emu", "one-emu", "five-emu", "three-emu"]),
            );

            let names: Vec<String> = resolver
                .resolve(Platform::Genesis)
                .iter()
                .map(|c| c.name().to_string())
                .collect();
            prop_assert_eq!(names, vec!["One", "Three", "Five", "Nine"]);
        }
    }
}
