//! romrun - platform-aware ROM launcher with emulator fallback
//!
//! This is the main CLI application that orchestrates detection, resolution
//! and launch supervision through the ops crate.

mod cli;
mod display;
mod error;
mod events;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use romrun_catalog::EmulatorCatalog;
use romrun_config::Config;
use romrun_events::EventReceiver;
use romrun_ops::{OperationResult, OpsContextBuilder, OpsCtx};
use romrun_platform::{SystemHost, SystemLocator};
use romrun_types::{ColorChoice, OutputFormat};
use std::process;
use std::sync::Arc;
use tokio::select;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    // Initialize tracing with JSON awareness
    init_tracing(json_mode, cli.global.debug);

    match run(cli).await {
        // A completed operation can still be a failure, a launch report
        // with no winner for one. The exit code carries that.
        Ok(result) => {
            if !result.is_success() {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Application error: {}", e);
            if !json_mode {
                eprintln!("Error: {e}");
            }
            process::exit(1);
        }
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<OperationResult, CliError> {
    info!("Starting romrun v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(&cli.global.config).await?;

    // 2. Merge environment variables
    config.merge_env()?;

    // 3. Apply CLI flags (highest precedence)
    apply_cli_config(&mut config, &cli.global);

    // The flag forces JSON; without it the configured default format decides.
    // Progress lines and logs go to stderr either way, so stdout stays
    // parseable whenever JSON is selected.
    let json_output = cli.global.json || config.general.default_output == OutputFormat::Json;

    // Load the emulator catalog, with the configured override if any
    let catalog = EmulatorCatalog::load(config.catalog_path().as_deref()).await?;

    // Create event channel
    let (event_sender, event_receiver) = romrun_events::channel();

    // Build operations context over the real environment
    let ops_ctx = OpsContextBuilder::new()
        .with_catalog(catalog)
        .with_locator(Arc::new(SystemLocator))
        .with_host(Arc::new(SystemHost))
        .with_event_sender(event_sender)
        .with_config(config.clone())
        .build()?;

    // Create output renderer
    let renderer = OutputRenderer::new(json_output, config.general.color);

    // Create event handler
    let colors_enabled = match config.general.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => console::Term::stdout().features().colors_supported(),
    };
    let mut event_handler = EventHandler::new(colors_enabled, cli.global.debug, json_output);

    // Execute command with event handling
    let result =
        execute_command_with_events(cli.command, ops_ctx, event_receiver, &mut event_handler)
            .await?;

    // Render final result
    renderer.render_result(&result)?;

    info!("Command completed");
    Ok(result)
}

/// Execute command with concurrent event handling
async fn execute_command_with_events(
    command: Commands,
    ops_ctx: OpsCtx,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
) -> Result<OperationResult, CliError> {
    let mut command_future = Box::pin(execute_command(command, ops_ctx));

    // Handle events concurrently with command execution
    loop {
        select! {
            // Command completed
            result = &mut command_future => {
                // Drain any remaining events
                while let Ok(event) = event_receiver.try_recv() {
                    event_handler.handle_event(event);
                }
                return result;
            }

            // Event received
            event = event_receiver.recv() => {
                match event {
                    Some(event) => event_handler.handle_event(event),
                    None => { /* Channel closed: keep waiting for command to finish */ }
                }
            }
        }
    }
}

/// Execute the specified command
async fn execute_command(command: Commands, ctx: OpsCtx) -> Result<OperationResult, CliError> {
    match command {
        Commands::Launch { rom, emulator } => {
            let report = romrun_ops::launch(&ctx, &rom, emulator.as_deref()).await?;
            Ok(OperationResult::Report(report))
        }

        Commands::List { platform } => {
            let list = romrun_ops::list_emulators(&ctx, platform);
            Ok(OperationResult::EmulatorList(list))
        }

        Commands::Platforms => {
            let list = romrun_ops::platforms(&ctx);
            Ok(OperationResult::PlatformList(list))
        }

        Commands::CheckHealth => {
            let health = romrun_ops::check_health(&ctx);
            Ok(OperationResult::HealthCheck(health))
        }
    }
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if json_mode {
        // JSON mode: suppress console logging to avoid contaminating output
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else if debug_enabled {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,romrun=debug")),
            )
            .init();
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,romrun=warn")),
            )
            .init();
    }
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, global: &cli::GlobalArgs) {
    if let Some(color) = &global.color {
        config.general.color = *color;
    }
}
