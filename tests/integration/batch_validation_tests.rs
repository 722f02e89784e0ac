//! Batch validation through the real client, cache and merger

#[cfg(test)]
mod tests {
    use crate::common::{KnownVideos, quota_error_body, test_config, video_ids};
    use vidcheck::BatchValidator;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn request_count(server: &MockServer) -> usize {
        server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_fifty_one_ids_take_two_calls_then_none() {
        let ids = video_ids(51);
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(KnownVideos::new().with_ids(ids.iter().step_by(2)))
            .mount(&server)
            .await;

        let validator = crate::assert_ok!(BatchValidator::from_config(&test_config(&server.uri())).await);

        let (first, report) = crate::assert_ok!(validator.validate_with_report(ids.clone()).await);
        assert_eq!(first.len(), 51);
        assert_eq!(first.exists_count(), 26);
        assert_eq!(report.upstream_calls, 2);
        assert_eq!(request_count(&server).await, 2);

        let (second, report) = crate::assert_ok!(validator.validate_with_report(ids).await);
        assert_eq!(report.cache_hits, 51);
        assert_eq!(report.upstream_calls, 0);
        assert_eq!(request_count(&server).await, 2);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_mixed_batch_resolves_every_distinct_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(
                KnownVideos::new()
                    .with("A", "Alpha", "Channel A")
                    .with("B", "   ", "Channel B"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let validator = crate::assert_ok!(BatchValidator::from_config(&test_config(&server.uri())).await);
        let results = crate::assert_ok!(validator.validate(["A", "B", "X", "A"]).await);

        assert_eq!(results.len(), 3);
        let a = results.get("A").unwrap();
        assert!(a.exists());
        assert_eq!(a.title(), "Alpha");
        let b = results.get("B").unwrap();
        assert!(b.exists());
        assert_eq!(b.title(), vidcheck::core::types::PLACEHOLDER_TITLE);
        let x = results.get("X").unwrap();
        assert!(!x.exists());
        assert_eq!(x.title(), "");
        assert_eq!(x.channel(), "");
    }

    #[tokio::test]
    async fn test_quota_stops_dispatch_and_fails_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(403).set_body_json(quota_error_body()))
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri());
        config.upstream.concurrency = 1;
        let validator = crate::assert_ok!(BatchValidator::from_config(&config).await);

        let err = crate::assert_err!(validator.validate(video_ids(120)).await);
        assert!(err.is_quota_exceeded());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_server_failure_fails_open() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri());
        config.upstream.max_retries = 0;
        let validator = crate::assert_ok!(BatchValidator::from_config(&config).await);

        let (results, report) =
            crate::assert_ok!(validator.validate_with_report(["A", "B"]).await);
        assert_eq!(results.len(), 2);
        assert_eq!(results.exists_count(), 0);
        assert_eq!(report.failed_chunks, 1);

        // Fail-open negatives are not cached by default
        crate::assert_ok!(validator.validate(["A", "B"]).await);
        assert_eq!(request_count(&server).await, 2);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_calls_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(KnownVideos::new().with("A", "Alpha", "Channel"))
            .expect(2)
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri());
        config.cache.enabled = false;
        let validator = crate::assert_ok!(BatchValidator::from_config(&config).await);

        crate::assert_ok!(validator.validate(["A"]).await);
        crate::assert_ok!(validator.validate(["A"]).await);
    }

    #[cfg(feature = "redis")]
    #[tokio::test]
    async fn test_unreachable_redis_degrades_to_all_miss() {
        use vidcheck::config::CacheBackend;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(KnownVideos::new().with("A", "Alpha", "Channel"))
            .expect(2)
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri());
        config.cache.backend = CacheBackend::Redis;
        config.storage.redis.url = "redis://127.0.0.1:1".to_string();
        config.storage.redis.connection_timeout = 1;
        let validator = crate::assert_ok!(BatchValidator::from_config(&config).await);

        let results = crate::assert_ok!(validator.validate(["A", "B"]).await);
        assert_eq!(results.exists("A"), Some(true));
        assert_eq!(results.exists("B"), Some(false));

        crate::assert_ok!(validator.validate(["A", "B"]).await);
    }
}
