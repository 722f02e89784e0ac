//! Configuration loading tests

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;
    use vidcheck::Config;
    use vidcheck::config::CacheBackend;
    use vidcheck::core::cache_resolver::TtlPolicy;

    const EXAMPLE: &str = include_str!("../../config/vidcheck.yaml.example");

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_example_config_is_valid_with_key() {
        let mut config = crate::assert_ok!(Config::from_yaml(EXAMPLE));
        crate::assert_ok!(config.apply_env_with(lookup_from(&[("VIDCHECK_API_KEY", "k")])));
        crate::assert_ok!(config.validate());

        assert_eq!(config.upstream.max_ids_per_call, 50);
        assert_eq!(config.cache.namespace, "existence-cache");
        assert_eq!(config.cache.version, "v1");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let config = crate::assert_ok!(Config::from_yaml(EXAMPLE));
        let err = crate::assert_err!(config.validate());
        assert!(err.to_string().contains("API key"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
upstream:
  api_key: file-key
  concurrency: 2
cache:
  backend: memory
  positive_ttl_days: 10
  negative_ttl_days: 2
  negative_jitter_hours: 12
"#
        )
        .unwrap();

        let config = crate::assert_ok!(Config::load(Some(file.path())).await);
        assert_eq!(config.upstream.concurrency, 2);
        assert_eq!(config.cache.backend, CacheBackend::Memory);

        let ttl = TtlPolicy::from_config(&config.cache);
        assert_eq!(ttl.positive.as_secs(), 10 * 24 * 3600);
        assert_eq!(ttl.max_negative().as_secs(), 2 * 24 * 3600 + 12 * 3600);
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/vidcheck.yaml"))).await;
        assert!(crate::assert_err!(result).to_string().contains("config"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = crate::assert_ok!(Config::from_yaml("upstream:\n  api_key: file-key\n"));
        crate::assert_ok!(config.apply_env_with(lookup_from(&[
            ("VIDCHECK_API_KEY", "env-key"),
            ("VIDCHECK_MAX_IDS_PER_CALL", "25"),
            ("VIDCHECK_CACHE_BACKEND", "redis"),
        ])));

        assert_eq!(config.upstream.api_key, "env-key");
        assert_eq!(config.upstream.max_ids_per_call, 25);
        assert_eq!(config.cache.backend, CacheBackend::Redis);
    }

    #[test]
    fn test_negative_ttl_longer_than_positive_is_rejected() {
        let mut config = crate::assert_ok!(Config::from_yaml(
            "upstream:\n  api_key: k\ncache:\n  positive_ttl_days: 1\n  negative_ttl_days: 1\n  negative_jitter_hours: 6\n"
        ));
        assert!(config.validate().is_err());

        config.cache.negative_jitter_hours = 0;
        crate::assert_ok!(config.validate());
    }

    #[test]
    fn test_chunk_size_above_limit_is_rejected() {
        let mut config = Config::default();
        config.upstream.api_key = "k".to_string();
        config.upstream.max_ids_per_call = 51;
        assert!(config.validate().is_err());
    }
}
