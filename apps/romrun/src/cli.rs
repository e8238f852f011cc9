//! Command line interface definition

use clap::{Parser, Subcommand};
use romrun_types::{ColorChoice, Platform};
use std::path::PathBuf;

/// romrun - platform-aware ROM launcher
#[derive(Parser)]
#[command(name = "romrun")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Launch ROMs with the best installed emulator, falling back on failure")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Color output control
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch a ROM with the best installed emulator
    #[command(alias = "run")]
    Launch {
        /// Path to the ROM file
        rom: PathBuf,

        /// Only try this catalog emulator (name match is case-insensitive)
        #[arg(short, long, value_name = "NAME")]
        emulator: Option<String>,
    },

    /// List catalog emulators and their installation status
    #[command(alias = "ls")]
    List {
        /// Limit the listing to one platform (nes, snes, gameboy, gba, genesis)
        #[arg(short, long)]
        platform: Option<Platform>,
    },

    /// Show supported platforms and their file extensions
    Platforms,

    /// Check emulator coverage for every supported platform
    CheckHealth,
}
