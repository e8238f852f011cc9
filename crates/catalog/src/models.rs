//! Catalog data models

use romrun_types::Platform;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Placeholder token replaced by the ROM path when a command is materialized
pub const ROM_PLACEHOLDER: &str = "{rom}";

/// Static metadata for one emulator candidate
///
/// The command is a template: its first element names the executable and the
/// remaining elements are fixed arguments, any of which may be the
/// [`ROM_PLACEHOLDER`] token. Priorities order candidates within a platform,
/// lower tried first; they are unique per platform but need not be
/// contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorDescriptor {
    /// Display name
    pub name: String,
    /// Command template; first element is the executable name
    pub command: Vec<String>,
    /// Ordering preference within the platform, lower = tried first
    pub priority: u32,
    /// Platform this emulator runs
    pub platform: Platform,
}

impl EmulatorDescriptor {
    /// Create a descriptor from static template parts
    pub fn new(
        platform: Platform,
        name: impl Into<String>,
        command: &[&str],
        priority: u32,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.iter().map(ToString::to_string).collect(),
            priority,
            platform,
        }
    }

    /// Executable name, the first element of the command template
    #[must_use]
    pub fn program(&self) -> &str {
        self.command.first().map_or("", String::as_str)
    }

    /// Materialize the full command line for a ROM
    ///
    /// The template's executable name is replaced by the located absolute
    /// path and every [`ROM_PLACEHOLDER`] token by the ROM path. A template
    /// without a placeholder gets the ROM path appended as the final
    /// argument, matching how most emulators accept a bare ROM operand.
    #[must_use]
    pub fn command_line(&self, executable: &Path, rom: &Path) -> Vec<String> {
        let rom_arg = rom.display().to_string();
        let mut line = Vec::with_capacity(self.command.len() + 1);
        line.push(executable.display().to_string());

        let mut substituted = false;
        for arg in self.command.iter().skip(1) {
            if arg == ROM_PLACEHOLDER {
                line.push(rom_arg.clone());
                substituted = true;
            } else {
                line.push(arg.clone());
            }
        }
        if !substituted {
            line.push(rom_arg);
        }
        line
    }
}

/// On-disk catalog document
///
/// Keys under `platform` are platform identifiers; each maps to an array of
/// entries. A platform present in the document replaces that platform's
/// built-in defaults entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub platform: HashMap<String, Vec<DescriptorEntry>>,
}

/// One catalog file entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorEntry {
    pub name: String,
    pub command: Vec<String>,
    pub priority: u32,
}

impl DescriptorEntry {
    /// Attach a platform to produce the full descriptor
    #[must_use]
    pub fn into_descriptor(self, platform: Platform) -> EmulatorDescriptor {
        EmulatorDescriptor {
            name: self.name,
            command: self.command,
            priority: self.priority,
            platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn command_line_substitutes_the_placeholder() {
        let desc = EmulatorDescriptor::new(
            Platform::Nes,
            "RetroArch-Nestopia",
            &[
                "retroarch",
                "-L",
                "/usr/lib/libretro/nestopia_libretro.so",
                "{rom}",
            ],
            6,
        );
        let line = desc.command_line(
            &PathBuf::from("/usr/bin/retroarch"),
            &PathBuf::from("/roms/game.nes"),
        );
        assert_eq!(
            line,
            vec![
                "/usr/bin/retroarch",
                "-L",
                "/usr/lib/libretro/nestopia_libretro.so",
                "/roms/game.nes"
            ]
        );
    }

    #[test]
    fn command_line_appends_rom_when_template_has_no_placeholder() {
        let desc = EmulatorDescriptor::new(Platform::Snes, "Snes9x", &["snes9x"], 1);
        let line = desc.command_line(
            &PathBuf::from("/usr/games/snes9x"),
            &PathBuf::from("zelda.smc"),
        );
        assert_eq!(line, vec!["/usr/games/snes9x", "zelda.smc"]);
    }

    #[test]
    fn program_is_the_first_template_element() {
        let desc = EmulatorDescriptor::new(
            Platform::Nes,
            "Mednafen",
            &["mednafen", "-nes.input.port1", "gamepad", "{rom}"],
            5,
        );
        assert_eq!(desc.program(), "mednafen");
    }
}
