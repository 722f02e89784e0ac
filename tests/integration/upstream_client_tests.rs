//! Upstream client tests against a mock `videos.list` endpoint

#[cfg(test)]
mod tests {
    use crate::common::{KnownVideos, error_body, quota_error_body, upstream_config};
    use std::time::Duration;
    use vidcheck::{ChunkOutcome, FailureReason, HttpUpstreamClient, UpstreamLookup};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    async fn request_count(server: &MockServer) -> usize {
        server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_found_ids_map_to_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "snippet"))
            .and(query_param("id", "A,B,X"))
            .and(query_param("key", "test-key"))
            .respond_with(
                KnownVideos::new()
                    .with("A", "First video", "Channel A")
                    .with("B", "", "Channel B"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let outcome = client.lookup(&ids(&["A", "B", "X"])).await;

        let found = match outcome {
            ChunkOutcome::Success(found) => found,
            other => panic!("expected success, got {:?}", other),
        };
        assert_eq!(found.len(), 2);
        assert_eq!(found["A"].title, "First video");
        assert_eq!(found["A"].channel, "Channel A");
        assert!(found.contains_key("B"));
        assert!(!found.contains_key("X"));
    }

    #[tokio::test]
    async fn test_quota_is_never_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(403).set_body_json(quota_error_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert_eq!(outcome, ChunkOutcome::QuotaExceeded);
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_server_error_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(KnownVideos::new().with("A", "Title", "Channel"))
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert!(matches!(outcome, ChunkOutcome::Success(ref found) if found.contains_key("A")));
        assert_eq!(request_count(&server).await, 2);
    }

    #[tokio::test]
    async fn test_persistent_server_error_fails_open_after_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert_eq!(
            outcome,
            ChunkOutcome::TransientFailure {
                reason: FailureReason::Server
            }
        );
        // First attempt plus max_retries
        assert_eq!(request_count(&server).await, 3);
    }

    #[tokio::test]
    async fn test_rate_limit_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(error_body(403, "rateLimitExceeded", "youtube.video")),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(KnownVideos::new())
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert!(matches!(outcome, ChunkOutcome::Success(ref found) if found.is_empty()));
        assert_eq!(request_count(&server).await, 2);
    }

    #[tokio::test]
    async fn test_bad_request_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(error_body(400, "badRequest", "global")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert_eq!(
            outcome,
            ChunkOutcome::TransientFailure {
                reason: FailureReason::Rejected
            }
        );
    }

    #[tokio::test]
    async fn test_unexpected_body_is_schema_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert_eq!(
            outcome,
            ChunkOutcome::TransientFailure {
                reason: FailureReason::Schema
            }
        );
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "items": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = upstream_config(&server.uri());
        config.timeout = 1;
        config.max_retries = 0;
        let client = crate::assert_ok!(HttpUpstreamClient::new(&config));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert_eq!(
            outcome,
            ChunkOutcome::TransientFailure {
                reason: FailureReason::Timeout
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_failure() {
        // Port 1 is reserved and refuses connections
        let mut config = upstream_config("http://127.0.0.1:1");
        config.max_retries = 0;
        let client = crate::assert_ok!(HttpUpstreamClient::new(&config));
        let outcome = client.lookup(&ids(&["A"])).await;

        assert_eq!(
            outcome,
            ChunkOutcome::TransientFailure {
                reason: FailureReason::Network
            }
        );
    }

    #[tokio::test]
    async fn test_empty_chunk_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(KnownVideos::new())
            .expect(0)
            .mount(&server)
            .await;

        let client = crate::assert_ok!(HttpUpstreamClient::new(&upstream_config(&server.uri())));
        let empty: Vec<String> = Vec::new();
        let outcome = client.lookup(&empty).await;
        assert!(matches!(outcome, ChunkOutcome::Success(ref found) if found.is_empty()));
    }
}
