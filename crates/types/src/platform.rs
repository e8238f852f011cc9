//! Platform identification and extension-based detection

use romrun_errors::DetectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A supported game system
///
/// The set is closed: adding a platform means adding a variant here plus its
/// extension mapping, nothing else. Detection looks at the file extension
/// only and never opens the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Nes,
    Snes,
    GameBoy,
    Gba,
    Genesis,
}

impl Platform {
    /// Every supported platform, in canonical order
    pub const ALL: [Self; 5] = [
        Self::Nes,
        Self::Snes,
        Self::GameBoy,
        Self::Gba,
        Self::Genesis,
    ];

    /// Detect the platform for a ROM path from its extension
    ///
    /// Matching is case-insensitive. A path without an extension fails the
    /// same way an unsupported extension does.
    ///
    /// # Errors
    ///
    /// Returns `DetectError::NoExtension` when the path has no extension and
    /// `DetectError::UnknownPlatform` when the extension is not in the
    /// supported set.
    pub fn from_path(path: &Path) -> Result<Self, DetectError> {
        match path.extension() {
            Some(ext) => Self::from_extension(&ext.to_string_lossy()),
            None => Err(DetectError::NoExtension {
                path: path.display().to_string(),
            }),
        }
    }

    /// Map a bare extension (no leading dot) to its platform
    ///
    /// # Errors
    ///
    /// Returns `DetectError::UnknownPlatform` when the extension is not in
    /// the supported set.
    pub fn from_extension(ext: &str) -> Result<Self, DetectError> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "nes" => Ok(Self::Nes),
            "smc" | "sfc" => Ok(Self::Snes),
            "gb" => Ok(Self::GameBoy),
            "gba" => Ok(Self::Gba),
            "md" | "gen" | "bin" => Ok(Self::Genesis),
            _ => Err(DetectError::UnknownPlatform { extension: ext }),
        }
    }

    /// ROM file extensions claimed by this platform, without the leading dot
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Nes => &["nes"],
            Self::Snes => &["smc", "sfc"],
            Self::GameBoy => &["gb"],
            Self::Gba => &["gba"],
            Self::Genesis => &["md", "gen", "bin"],
        }
    }

    /// Canonical lowercase identifier, also the catalog table key
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::GameBoy => "gameboy",
            Self::Gba => "gba",
            Self::Genesis => "genesis",
        }
    }

    /// Human-readable platform name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nes => "NES",
            Self::Snes => "SNES",
            Self::GameBoy => "Game Boy",
            Self::Gba => "Game Boy Advance",
            Self::Genesis => "Sega Genesis",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = DetectError;

    /// Parse a platform identifier; accepts the short aliases `gb` and `md`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nes" => Ok(Self::Nes),
            "snes" => Ok(Self::Snes),
            "gameboy" | "gb" => Ok(Self::GameBoy),
            "gba" => Ok(Self::Gba),
            "genesis" | "md" => Ok(Self::Genesis),
            other => Err(DetectError::UnknownName {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn detects_every_supported_extension() {
        let cases = [
            ("game.nes", Platform::Nes),
            ("game.smc", Platform::Snes),
            ("game.sfc", Platform::Snes),
            ("game.gb", Platform::GameBoy),
            ("game.gba", Platform::Gba),
            ("game.md", Platform::Genesis),
            ("game.gen", Platform::Genesis),
            ("game.bin", Platform::Genesis),
        ];
        for (path, expected) in cases {
            assert_eq!(Platform::from_path(Path::new(path)).unwrap(), expected);
        }
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(
            Platform::from_path(Path::new("GAME.NES")).unwrap(),
            Platform::Nes
        );
        assert_eq!(
            Platform::from_path(Path::new("save.SfC")).unwrap(),
            Platform::Snes
        );
    }

    #[test]
    fn unsupported_extension_is_unknown_platform() {
        let err = Platform::from_path(Path::new("game.xyz")).unwrap_err();
        assert!(matches!(
            err,
            DetectError::UnknownPlatform { extension } if extension == "xyz"
        ));
    }

    #[test]
    fn missing_extension_fails_detection() {
        let err = Platform::from_path(Path::new("Makefile")).unwrap_err();
        assert!(matches!(err, DetectError::NoExtension { .. }));
    }

    #[test]
    fn path_components_are_ignored() {
        let path = PathBuf::from("/roms/snes.collection/zelda.smc");
        assert_eq!(Platform::from_path(&path).unwrap(), Platform::Snes);
    }

    #[test]
    fn parses_ids_and_aliases() {
        assert_eq!("nes".parse::<Platform>().unwrap(), Platform::Nes);
        assert_eq!("GameBoy".parse::<Platform>().unwrap(), Platform::GameBoy);
        assert_eq!("gb".parse::<Platform>().unwrap(), Platform::GameBoy);
        assert_eq!("md".parse::<Platform>().unwrap(), Platform::Genesis);
        assert!("dreamcast".parse::<Platform>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    proptest! {
        #[test]
        fn arbitrary_extensions_outside_the_set_fail(ext in "[a-z0-9]{1,6}") {
            let supported = ["nes", "smc", "sfc", "gb", "gba", "md", "gen", "bin"];
            prop_assume!(!supported.contains(&ext.as_str()));
            prop_assert!(Platform::from_extension(&ext).is_err());
        }
    }
}
