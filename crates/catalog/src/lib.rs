#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Emulator catalog for romrun
//!
//! This crate holds the platform -> emulator table: which emulators can run
//! which platform, how to invoke them, and in which order to try them. The
//! table ships with built-in defaults and can be replaced per platform from
//! a TOML file, so operators add or reprioritize emulators without touching
//! detection or launch logic.

mod models;

pub use models::{CatalogDocument, DescriptorEntry, EmulatorDescriptor, ROM_PLACEHOLDER};

use romrun_errors::{CatalogError, Error};
use romrun_types::Platform;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Ordered emulator registry, one table per platform
#[derive(Debug, Clone)]
pub struct EmulatorCatalog {
    tables: HashMap<Platform, Vec<EmulatorDescriptor>>,
}

impl EmulatorCatalog {
    /// Catalog with the built-in default table
    ///
    /// The defaults always pass validation; a test enforces that.
    #[must_use]
    pub fn builtin() -> Self {
        let mut tables = builtin_tables();
        for descriptors in tables.values_mut() {
            descriptors.sort_by_key(|d| d.priority);
        }
        Self { tables }
    }

    /// Build a catalog from a parsed document, without the built-in defaults
    ///
    /// Platforms absent from the document have no emulators at all. This is
    /// the constructor to use when fabricating a catalog in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if a platform key is unknown or the entries fail
    /// validation (duplicate priority, empty command).
    pub fn from_document(document: CatalogDocument) -> Result<Self, Error> {
        Self::from_tables(document_tables(document)?)
    }

    /// Load a catalog file and apply it over the built-in defaults
    ///
    /// Each platform present in the file replaces that platform's defaults
    /// entirely; absent platforms keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// its entries fail validation.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|_| CatalogError::NotFound {
                    path: path.display().to_string(),
                })?;

        let document: CatalogDocument =
            toml::from_str(&contents).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            platforms = document.platform.len(),
            "loaded catalog override"
        );

        let mut tables = builtin_tables();
        for (platform, descriptors) in document_tables(document)? {
            tables.insert(platform, descriptors);
        }
        Self::from_tables(tables)
    }

    /// Load the catalog, honoring an optional override file
    ///
    /// # Errors
    ///
    /// Returns an error if the override file is given but cannot be loaded.
    pub async fn load(override_path: Option<&Path>) -> Result<Self, Error> {
        match override_path {
            Some(path) => Self::load_from_file(path).await,
            None => Ok(Self::builtin()),
        }
    }

    /// Descriptors registered for a platform, ordered ascending by priority
    ///
    /// A platform with no registered emulators yields an empty slice, which
    /// is not an error by itself.
    #[must_use]
    pub fn descriptors_for(&self, platform: Platform) -> &[EmulatorDescriptor] {
        self.tables.get(&platform).map_or(&[], Vec::as_slice)
    }

    /// Look up a descriptor by display name, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownEmulator` when the platform's table has
    /// no entry with that name.
    pub fn descriptor_named(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<&EmulatorDescriptor, Error> {
        self.descriptors_for(platform)
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                CatalogError::UnknownEmulator {
                    platform: platform.to_string(),
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Total number of registered descriptors across all platforms
    #[must_use]
    pub fn descriptor_count(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    fn from_tables(tables: HashMap<Platform, Vec<EmulatorDescriptor>>) -> Result<Self, Error> {
        validate_tables(&tables)?;
        let mut tables = tables;
        for descriptors in tables.values_mut() {
            descriptors.sort_by_key(|d| d.priority);
        }
        Ok(Self { tables })
    }
}

fn document_tables(
    document: CatalogDocument,
) -> Result<HashMap<Platform, Vec<EmulatorDescriptor>>, Error> {
    let mut tables = HashMap::new();
    for (key, entries) in document.platform {
        let platform: Platform = key.parse().map_err(|_| CatalogError::ParseError {
            message: format!("unknown platform key: {key}"),
        })?;
        let descriptors = entries
            .into_iter()
            .map(|entry| entry.into_descriptor(platform))
            .collect();
        tables.insert(platform, descriptors);
    }
    Ok(tables)
}

fn validate_tables(tables: &HashMap<Platform, Vec<EmulatorDescriptor>>) -> Result<(), Error> {
    for (platform, descriptors) in tables {
        let mut by_priority: HashMap<u32, &str> = HashMap::new();
        for descriptor in descriptors {
            if descriptor.program().is_empty() {
                return Err(CatalogError::EmptyCommand {
                    platform: platform.to_string(),
                    name: descriptor.name.clone(),
                }
                .into());
            }
            if let Some(first) = by_priority.insert(descriptor.priority, &descriptor.name) {
                return Err(CatalogError::DuplicatePriority {
                    platform: platform.to_string(),
                    priority: descriptor.priority,
                    first: first.to_string(),
                    second: descriptor.name.clone(),
                }
                .into());
            }
        }
    }
    Ok(())
}

fn builtin_tables() -> HashMap<Platform, Vec<EmulatorDescriptor>> {
    use EmulatorDescriptor as D;

    let mut tables = HashMap::new();
    tables.insert(
        Platform::Nes,
        vec![
            D::new(Platform::Nes, "Nestopia", &["nestopia", "{rom}"], 1),
            D::new(Platform::Nes, "FCEUX", &["fceux", "{rom}"], 2),
            D::new(Platform::Nes, "Mesen", &["mesen", "{rom}"], 3),
            D::new(Platform::Nes, "VirtuaNES", &["virtuanes", "{rom}"], 4),
            D::new(
                Platform::Nes,
                "Mednafen",
                &["mednafen", "-nes.input.port1", "gamepad", "{rom}"],
                5,
            ),
            D::new(
                Platform::Nes,
                "RetroArch-Nestopia",
                &[
                    "retroarch",
                    "-L",
                    "/usr/lib/libretro/nestopia_libretro.so",
                    "{rom}",
                ],
                6,
            ),
        ],
    );
    tables.insert(
        Platform::Snes,
        vec![
            D::new(Platform::Snes, "Snes9x", &["snes9x", "{rom}"], 1),
            D::new(Platform::Snes, "bsnes", &["bsnes", "{rom}"], 2),
            D::new(
                Platform::Snes,
                "RetroArch-Snes9x",
                &[
                    "retroarch",
                    "-L",
                    "/usr/lib/libretro/snes9x_libretro.so",
                    "{rom}",
                ],
                3,
            ),
        ],
    );
    tables.insert(
        Platform::GameBoy,
        vec![
            D::new(Platform::GameBoy, "Gambatte", &["gambatte", "{rom}"], 1),
            D::new(
                Platform::GameBoy,
                "RetroArch-Gambatte",
                &[
                    "retroarch",
                    "-L",
                    "/usr/lib/libretro/gambatte_libretro.so",
                    "{rom}",
                ],
                2,
            ),
        ],
    );
    tables.insert(
        Platform::Gba,
        vec![
            D::new(Platform::Gba, "mGBA", &["mgba", "{rom}"], 1),
            D::new(
                Platform::Gba,
                "VisualBoyAdvance",
                &["visualboyadvance", "{rom}"],
                2,
            ),
            D::new(
                Platform::Gba,
                "RetroArch-mGBA",
                &[
                    "retroarch",
                    "-L",
                    "/usr/lib/libretro/mgba_libretro.so",
                    "{rom}",
                ],
                3,
            ),
        ],
    );
    tables.insert(
        Platform::Genesis,
        vec![
            D::new(
                Platform::Genesis,
                "Genesis-Plus-GX",
                &["genesis-plus-gx", "{rom}"],
                1,
            ),
            D::new(
                Platform::Genesis,
                "RetroArch-GenesisPlus",
                &[
                    "retroarch",
                    "-L",
                    "/usr/lib/libretro/genesis_plus_gx_libretro.so",
                    "{rom}",
                ],
                2,
            ),
        ],
    );
    tables
}
