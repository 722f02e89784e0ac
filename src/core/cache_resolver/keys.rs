//! Cache key layout

use crate::config::CacheConfig;

/// Builds `{namespace}:{version}:{identifier}` keys
///
/// Bumping the version orphans every entry written under the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeyBuilder {
    prefix: String,
}

impl CacheKeyBuilder {
    pub fn new(namespace: impl AsRef<str>, version: impl AsRef<str>) -> Self {
        Self {
            prefix: format!("{}:{}:", namespace.as_ref(), version.as_ref()),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(&config.namespace, &config.version)
    }

    /// Key for one identifier
    pub fn key(&self, identifier: &str) -> String {
        let mut key = String::with_capacity(self.prefix.len() + identifier.len());
        key.push_str(&self.prefix);
        key.push_str(identifier);
        key
    }

    pub fn keys<'a, I>(&self, identifiers: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        identifiers.into_iter().map(|id| self.key(id)).collect()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for CacheKeyBuilder {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
