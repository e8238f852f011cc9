//! Event handling and progress display

use console::style;
use romrun_events::{AppEvent, GeneralEvent, LaunchEvent, ResolverEvent};
use romrun_types::LaunchPhase;

/// Event handler for progress display and user feedback
pub struct EventHandler {
    /// Whether styled output is enabled
    colors: bool,
    /// Whether debug-level events are shown
    debug: bool,
    /// Whether events are emitted as JSON lines instead of styled text
    json: bool,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(colors: bool, debug: bool, json: bool) -> Self {
        Self {
            colors,
            debug,
            json,
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: AppEvent) {
        if self.json {
            // Structured event lines go to stderr; stdout carries only the
            // final result document.
            if let Ok(line) = serde_json::to_string(&event) {
                eprintln!("{line}");
            }
            return;
        }

        match event {
            AppEvent::General(event) => self.handle_general(event),
            AppEvent::Resolver(event) => self.handle_resolver(event),
            AppEvent::Launch(event) => self.handle_launch(event),
        }
    }

    fn handle_general(&mut self, event: GeneralEvent) {
        match event {
            GeneralEvent::Warning { message, context } => {
                self.show_warning(&message);
                if let Some(context) = context {
                    eprintln!("   {context}");
                }
            }
            GeneralEvent::Error { message, details } => {
                self.show_error(&message);
                if let Some(details) = details {
                    eprintln!("   {details}");
                }
            }
            GeneralEvent::DebugLog { message, context } => {
                if self.debug {
                    eprintln!("🔍 {message}");
                    for (key, value) in context {
                        eprintln!("   {key}: {value}");
                    }
                }
            }
            GeneralEvent::OperationStarted { operation } => {
                if self.debug {
                    eprintln!("🔍 starting {operation}");
                }
            }
            GeneralEvent::OperationCompleted { operation, success } => {
                if self.debug {
                    let status = if success { "ok" } else { "failed" };
                    eprintln!("🔍 {operation} finished: {status}");
                }
            }
            GeneralEvent::OperationFailed { operation, error } => {
                self.show_error(&format!("{operation} failed: {error}"));
            }
        }
    }

    fn handle_resolver(&mut self, event: ResolverEvent) {
        match event {
            ResolverEvent::Started {
                platform,
                descriptors,
            } => {
                self.show_status(&format!(
                    "🔍 Resolving {platform} emulators ({descriptors} in catalog)"
                ));
            }
            ResolverEvent::CandidateLocated {
                emulator,
                executable,
                priority: _,
            } => {
                if self.debug {
                    self.show_status(&format!("   found {emulator} at {}", executable.display()));
                }
            }
            ResolverEvent::CandidateSkipped { emulator, program } => {
                if self.debug {
                    self.show_status(&format!("   {emulator} not installed ({program})"));
                }
            }
            ResolverEvent::Completed {
                platform,
                candidates,
            } => {
                if candidates == 1 {
                    self.show_status(&format!("✅ 1 installed emulator for {platform}"));
                } else {
                    self.show_status(&format!(
                        "✅ {candidates} installed emulators for {platform}"
                    ));
                }
            }
        }
    }

    fn handle_launch(&mut self, event: LaunchEvent) {
        match event {
            LaunchEvent::PhaseChanged { phase } => {
                if self.debug && !matches!(phase, LaunchPhase::Attempting { .. }) {
                    self.show_status(&format!("🔄 phase: {phase}"));
                }
            }
            LaunchEvent::AttemptStarted {
                index,
                total,
                emulator,
                command,
            } => {
                self.show_status(&format!(
                    "🎮 [{}/{total}] {emulator}: {}",
                    index + 1,
                    command.join(" ")
                ));
            }
            LaunchEvent::AttemptCompleted {
                index: _,
                emulator,
                success,
                detail,
            } => {
                if success {
                    self.show_status(&format!("✅ {emulator} exited cleanly"));
                } else {
                    let detail = detail.unwrap_or_else(|| "failed".to_string());
                    self.show_status(&format!("❌ {emulator}: {detail}"));
                }
            }
            LaunchEvent::Completed {
                success,
                winner,
                attempts,
            } => {
                if success {
                    if let Some(winner) = winner {
                        self.show_status(&format!("🏁 Launched with {winner}"));
                    }
                } else if attempts == 1 {
                    self.show_error("🏁 The only installed emulator failed");
                } else {
                    self.show_error(&format!("🏁 All {attempts} emulators failed"));
                }
            }
            LaunchEvent::Failed { failure } => {
                self.show_error(&format!("🏁 {}", failure.message));
                if let Some(hint) = failure.hint {
                    eprintln!("   {hint}");
                }
            }
        }
    }

    /// Show a status message
    fn show_status(&self, message: &str) {
        if self.colors {
            eprintln!("{}", style(message).for_stderr());
        } else {
            eprintln!("{message}");
        }
    }

    /// Show a warning message
    fn show_warning(&self, message: &str) {
        if self.colors {
            eprintln!("⚠️  {}", style(message).yellow().for_stderr());
        } else {
            eprintln!("⚠️  {message}");
        }
    }

    /// Show an error message
    fn show_error(&self, message: &str) {
        if self.colors {
            eprintln!("{}", style(message).red().for_stderr());
        } else {
            eprintln!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The handler only writes to stderr, so these exercise the match arms
    // for panics rather than asserting on captured output.
    #[test]
    fn every_event_domain_is_handled() {
        let mut handler = EventHandler::new(false, true, false);
        handler.handle_event(AppEvent::General(GeneralEvent::warning("low disk space")));
        handler.handle_event(AppEvent::Resolver(ResolverEvent::started("nes", 6)));
        handler.handle_event(AppEvent::Launch(LaunchEvent::attempt_completed(
            0,
            "FCEUX",
            false,
            Some("exited with code 1".to_string()),
        )));
    }

    #[test]
    fn json_mode_serializes_instead_of_styling() {
        let mut handler = EventHandler::new(true, false, true);
        handler.handle_event(AppEvent::Launch(LaunchEvent::Completed {
            success: true,
            winner: Some("Nestopia".to_string()),
            attempts: 1,
        }));
    }
}
