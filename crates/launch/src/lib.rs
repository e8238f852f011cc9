#![warn(clippy::pedantic)]
#![deny(clippy::all)]

//! Sequential launch supervision for romrun
//!
//! This crate walks an ordered candidate list, running one emulator at a
//! time to completion, and records every attempt in a [`LaunchReport`].
//! The first clean exit wins; anything else moves the chain forward. The
//! supervisor never probes the environment itself, it only consumes
//! candidates the resolver already confirmed installed.

mod supervisor;

pub use romrun_types::{AttemptOutcome, LaunchAttempt, LaunchReport};
pub use supervisor::LaunchSupervisor;
