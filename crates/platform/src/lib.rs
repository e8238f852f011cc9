//! Platform abstraction layer for romrun's environment seams.
//!
//! This crate isolates the only two OS-dependent operations in the system:
//! - Executable lookup on the search path (is an emulator installed?)
//! - Hosting a foreground child process until it exits
//!
//! Both hide behind narrow traits so the resolver and supervisor can be
//! exercised against fabricated environments.

pub mod locate;
pub mod process;

pub use locate::{ExecutableLocator, SystemLocator};
pub use process::{ChildExit, CommandSpec, ProcessHost, SystemHost};
