use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Candidate resolution events (catalog lookup plus environment probing)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResolverEvent {
    /// Resolution started for a platform
    Started { platform: String, descriptors: usize },

    /// A descriptor's executable was found on the search path
    CandidateLocated {
        emulator: String,
        executable: PathBuf,
        priority: u32,
    },

    /// A descriptor was dropped because its executable is not installed
    CandidateSkipped { emulator: String, program: String },

    /// Resolution finished with an ordered candidate list
    Completed { platform: String, candidates: usize },
}

impl ResolverEvent {
    /// Create a resolution started event
    pub fn started(platform: impl Into<String>, descriptors: usize) -> Self {
        Self::Started {
            platform: platform.into(),
            descriptors,
        }
    }

    /// Create a resolution completed event
    pub fn completed(platform: impl Into<String>, candidates: usize) -> Self {
        Self::Completed {
            platform: platform.into(),
            candidates,
        }
    }
}
