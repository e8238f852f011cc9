//! Sequential attempt loop over resolved candidates

use romrun_errors::{Error, LaunchError};
use romrun_events::{AppEvent, EventEmitter, EventSender, LaunchEvent};
use romrun_platform::ProcessHost;
use romrun_resolver::ResolvedCandidate;
use romrun_types::{AttemptOutcome, LaunchAttempt, LaunchPhase, LaunchReport, Platform};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Launch supervisor
///
/// Runs candidates strictly one at a time, blocking on each child until it
/// exits. There is no timeout: an emulator that runs for hours is the happy
/// path, not a hang. A nonzero exit always counts as a failed attempt and
/// advances the chain, even when it comes from the user quitting a working
/// emulator in a way that happens to return nonzero.
pub struct LaunchSupervisor {
    /// Process execution seam
    host: Arc<dyn ProcessHost>,
    /// Optional progress event channel
    tx: Option<EventSender>,
}

impl LaunchSupervisor {
    /// Create a supervisor over a process host
    #[must_use]
    pub fn new(host: Arc<dyn ProcessHost>) -> Self {
        Self { host, tx: None }
    }

    /// Attach an event channel for attempt progress
    #[must_use]
    pub fn with_events(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Try candidates in order until one exits cleanly
    ///
    /// Every attempt lands in the returned report whether it succeeded or
    /// not; exhausting the whole list is still an `Ok` report, just one
    /// with `success` false. Spawn failures are recorded on the attempt and
    /// recovered by moving to the next candidate, never propagated.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::NoEmulatorAvailable` when the candidate list
    /// is empty, before any attempt is made.
    pub async fn supervise(
        &self,
        rom: &Path,
        platform: Platform,
        candidates: &[ResolvedCandidate],
    ) -> Result<LaunchReport, Error> {
        if candidates.is_empty() {
            warn!(platform = %platform, "no installed emulator to attempt");
            return Err(LaunchError::NoEmulatorAvailable {
                platform: platform.to_string(),
            }
            .into());
        }

        let started = Instant::now();
        let total = candidates.len();
        let mut attempts = Vec::with_capacity(total);

        for (index, candidate) in candidates.iter().enumerate() {
            self.emit_phase_changed(LaunchPhase::Attempting { index });

            let spec = candidate.command(rom);
            let command = spec.to_line();
            info!(
                emulator = candidate.name(),
                command = %command.join(" "),
                "attempting launch"
            );
            self.emit(AppEvent::Launch(LaunchEvent::attempt_started(
                index,
                total,
                candidate.name(),
                command.clone(),
            )));

            let outcome = match self.host.run_to_exit(&spec).await {
                Ok(exit) => {
                    if exit.success() {
                        AttemptOutcome::Success
                    } else if let Some(code) = exit.code {
                        AttemptOutcome::Exited { code }
                    } else {
                        AttemptOutcome::Signaled
                    }
                }
                Err(error) => {
                    debug!(emulator = candidate.name(), %error, "attempt never ran");
                    AttemptOutcome::SpawnFailed {
                        message: error.to_string(),
                    }
                }
            };

            let succeeded = outcome.is_success();
            self.emit(AppEvent::Launch(LaunchEvent::attempt_completed(
                index,
                candidate.name(),
                succeeded,
                outcome.failure_detail(),
            )));
            attempts.push(LaunchAttempt {
                emulator: candidate.name().to_string(),
                command,
                outcome,
            });

            if succeeded {
                let winner = candidate.name().to_string();
                info!(emulator = %winner, "launch succeeded");
                self.emit_phase_changed(LaunchPhase::Success);
                self.emit(AppEvent::Launch(LaunchEvent::Completed {
                    success: true,
                    winner: Some(winner.clone()),
                    attempts: attempts.len(),
                }));
                return Ok(LaunchReport {
                    rom: rom.to_path_buf(),
                    platform,
                    success: true,
                    winner: Some(winner),
                    attempts,
                    duration_ms: elapsed_ms(started),
                });
            }
        }

        warn!(platform = %platform, attempts = attempts.len(), "all candidates failed");
        self.emit_phase_changed(LaunchPhase::ExhaustedFailure);
        self.emit(AppEvent::Launch(LaunchEvent::Completed {
            success: false,
            winner: None,
            attempts: attempts.len(),
        }));
        Ok(LaunchReport {
            rom: rom.to_path_buf(),
            platform,
            success: false,
            winner: None,
            attempts,
            duration_ms: elapsed_ms(started),
        })
    }
}

impl EventEmitter for LaunchSupervisor {
    fn event_sender(&self) -> Option<&EventSender> {
        self.tx.as_ref()
    }
}

impl std::fmt::Debug for LaunchSupervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchSupervisor")
            .field("events", &self.tx.is_some())
            .finish_non_exhaustive()
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
