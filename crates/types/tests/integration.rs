//! Integration tests for core types

#[cfg(test)]
mod tests {
    use romrun_types::{AttemptOutcome, LaunchAttempt, LaunchReport, Platform};
    use std::path::PathBuf;

    #[test]
    fn platform_serializes_to_lowercase_id() {
        let json = serde_json::to_string(&Platform::GameBoy).unwrap();
        assert_eq!(json, "\"gameboy\"");
        let back: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Platform::GameBoy);
    }

    #[test]
    fn attempt_outcome_is_kind_tagged() {
        let json = serde_json::to_string(&AttemptOutcome::Exited { code: 1 }).unwrap();
        assert_eq!(json, "{\"kind\":\"exited\",\"code\":1}");
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = LaunchReport {
            rom: PathBuf::from("/roms/game.gba"),
            platform: Platform::Gba,
            success: false,
            winner: None,
            attempts: vec![LaunchAttempt {
                emulator: "mGBA".into(),
                command: vec!["mgba".into(), "/roms/game.gba".into()],
                outcome: AttemptOutcome::SpawnFailed {
                    message: "No such file or directory".into(),
                },
            }],
            duration_ms: 3,
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: LaunchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.platform, Platform::Gba);
        assert!(!back.success);
        assert_eq!(back.attempts.len(), 1);
        assert_eq!(back.attempts[0].emulator, "mGBA");
    }
}
