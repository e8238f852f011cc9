//! Resolved launch candidates

use romrun_catalog::EmulatorDescriptor;
use romrun_platform::CommandSpec;
use std::path::{Path, PathBuf};

/// An emulator descriptor confirmed installed in the current environment
///
/// The resolver only constructs these for descriptors whose executable was
/// located at resolution time; holding one means the candidate can at least
/// be addressed by absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCandidate {
    /// The catalog descriptor this candidate came from
    pub descriptor: EmulatorDescriptor,
    /// Absolute path of the located executable
    pub executable: PathBuf,
}

impl ResolvedCandidate {
    /// Pair a descriptor with its located executable
    #[must_use]
    pub fn new(descriptor: EmulatorDescriptor, executable: PathBuf) -> Self {
        Self {
            descriptor,
            executable,
        }
    }

    /// Emulator display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Ordering priority, lower tried first
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.descriptor.priority
    }

    /// Build the spawnable command for a ROM
    ///
    /// The command template's executable is replaced by the located absolute
    /// path and the ROM placeholder by the ROM path.
    #[must_use]
    pub fn command(&self, rom: &Path) -> CommandSpec {
        let line = self.descriptor.command_line(&self.executable, rom);
        CommandSpec::new(&self.executable).args(line.iter().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use romrun_types::Platform;

    #[test]
    fn command_uses_the_located_executable() {
        let descriptor = EmulatorDescriptor::new(
            Platform::Nes,
            "Nestopia",
            &["nestopia", "{rom}"],
            1,
        );
        let candidate =
            ResolvedCandidate::new(descriptor, PathBuf::from("/usr/local/bin/nestopia"));

        let spec = candidate.command(Path::new("/roms/mario.nes"));
        assert_eq!(
            spec.to_line(),
            vec!["/usr/local/bin/nestopia", "/roms/mario.nes"]
        );
    }
}
