#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Emulator resolution for romrun
//!
//! This crate turns a platform into an ordered list of launchable
//! candidates: the catalog says which emulators exist, the injected locator
//! says which are actually installed, and the survivors come back sorted
//! ascending by priority. Resolution happens fresh per request; the
//! environment may change between runs, so nothing is cached.

mod candidate;
mod resolver;

pub use candidate::ResolvedCandidate;
pub use resolver::EmulatorResolver;
