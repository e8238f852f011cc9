//! Integration tests for events

#[cfg(test)]
mod tests {
    use romrun_events::*;
    use romrun_types::LaunchPhase;

    #[tokio::test]
    async fn test_event_sender_ext() {
        let (tx, mut rx) = channel();

        // Test emit helpers
        tx.emit_error("test error");
        tx.emit_debug("test debug");

        let event1 = rx.recv().await.unwrap();
        assert!(matches!(
            event1,
            AppEvent::General(GeneralEvent::Error { .. })
        ));

        let event2 = rx.recv().await.unwrap();
        assert!(matches!(
            event2,
            AppEvent::General(GeneralEvent::DebugLog { .. })
        ));
    }

    #[tokio::test]
    async fn test_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);

        // Should not panic when receiver is dropped
        tx.emit_warning("ignored");
    }

    #[test]
    fn test_event_source_by_domain() {
        let event = AppEvent::Launch(LaunchEvent::PhaseChanged {
            phase: LaunchPhase::Resolving,
        });
        assert_eq!(event.event_source().as_str(), "launch");

        let event = AppEvent::Resolver(ResolverEvent::started("nes", 6));
        assert_eq!(event.event_source().as_str(), "resolver");
    }

    #[test]
    fn test_app_event_serialization_is_domain_tagged() {
        let event = AppEvent::Resolver(ResolverEvent::completed("snes", 2));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"domain\":\"resolver\""));
        assert!(json.contains("\"type\":\"Completed\""));
    }

    #[test]
    fn test_failure_context_from_error() {
        use romrun_errors::LaunchError;

        let err = LaunchError::NoEmulatorAvailable {
            platform: "gba".into(),
        };
        let ctx = FailureContext::from_error(&err);
        assert_eq!(ctx.code.as_deref(), Some("launch.no_emulator_available"));
        assert!(!ctx.retryable);
        assert!(ctx.hint.is_some());
    }
}
