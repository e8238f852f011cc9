//! Integration tests for error types

#[cfg(test)]
mod tests {
    use romrun_errors::*;

    #[test]
    fn test_error_conversion() {
        let detect_err = DetectError::UnknownPlatform {
            extension: "xyz".into(),
        };
        let err: Error = detect_err.into();
        assert!(matches!(err, Error::Detect(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LaunchError::NoEmulatorAvailable {
            platform: "snes".into(),
        };
        assert_eq!(err.to_string(), "no emulator available for platform snes");
    }

    #[test]
    fn test_error_clone() {
        let err = CatalogError::UnknownEmulator {
            platform: "nes".into(),
            name: "zsnes".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: Error = io_err.into();
        assert!(matches!(
            err,
            Error::Io {
                kind: std::io::ErrorKind::PermissionDenied,
                ..
            }
        ));
    }

    #[test]
    fn test_user_facing_codes() {
        let err: Error = DetectError::NoExtension {
            path: "Makefile".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("detect.no_extension"));
        assert!(!err.is_retryable());
        assert!(err.user_hint().is_some());
    }
}
