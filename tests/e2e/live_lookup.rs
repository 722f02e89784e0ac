//! E2E tests against the live `videos.list` endpoint
//!
//! Run with: VIDCHECK_API_KEY=xxx cargo test -- --ignored live

#[cfg(test)]
mod tests {
    use vidcheck::{BatchValidator, Config};

    /// A long-lived public video
    const KNOWN_VIDEO: &str = "dQw4w9WgXcQ";
    /// Well-formed but not assigned
    const UNKNOWN_VIDEO: &str = "zzzzzzzzzz0";

    #[tokio::test]
    #[ignore]
    async fn test_live_validation() {
        crate::skip_without_env!("VIDCHECK_API_KEY");

        let config = crate::assert_ok!(Config::from_env());
        let validator = crate::assert_ok!(BatchValidator::from_config(&config).await);

        let (results, report) = crate::assert_ok!(
            validator
                .validate_with_report([KNOWN_VIDEO, UNKNOWN_VIDEO, "not a video id"])
                .await
        );

        assert_eq!(results.len(), 3);
        let known = results.get(KNOWN_VIDEO).unwrap();
        assert!(known.exists(), "expected {} to exist", KNOWN_VIDEO);
        assert!(!known.title().is_empty());
        assert!(!known.channel().is_empty());
        assert_eq!(results.exists(UNKNOWN_VIDEO), Some(false));
        assert_eq!(results.exists("not a video id"), Some(false));
        assert!(report.upstream_calls <= 1);
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_repeat_is_served_from_cache() {
        crate::skip_without_env!("VIDCHECK_API_KEY");

        let config = crate::assert_ok!(Config::from_env());
        let validator = crate::assert_ok!(BatchValidator::from_config(&config).await);

        crate::assert_ok!(validator.validate([KNOWN_VIDEO]).await);
        let (_, report) = crate::assert_ok!(validator.validate_with_report([KNOWN_VIDEO]).await);
        assert_eq!(report.upstream_calls, 0);
        assert_eq!(report.cache_hits, 1);
    }
}
