//! Existence results and the per-batch result map

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map;

/// Title used when the upstream omits one for an existing video
pub const PLACEHOLDER_TITLE: &str = "Untitled video";
/// Channel label used when the upstream omits one for an existing video
pub const PLACEHOLDER_CHANNEL: &str = "Unknown channel";

/// Existence flag plus light metadata for one identifier
///
/// A missing video always carries empty metadata and an existing one always
/// carries non-empty metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExistenceResult")]
pub struct ExistenceResult {
    id: String,
    exists: bool,
    title: String,
    channel: String,
}

impl ExistenceResult {
    /// Result for an identifier the upstream reported as present
    pub fn found(
        id: impl Into<String>,
        title: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            exists: true,
            title: non_blank_or(title.into(), PLACEHOLDER_TITLE),
            channel: non_blank_or(channel.into(), PLACEHOLDER_CHANNEL),
        }
    }

    /// Result for an identifier that does not exist (or could not be confirmed)
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exists: false,
            title: String::new(),
            channel: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

fn non_blank_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Unchecked wire form; converted through [`TryFrom`] so decoded values obey
/// the same invariant as constructed ones.
#[derive(Deserialize)]
struct RawExistenceResult {
    id: String,
    exists: bool,
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel: String,
}

impl TryFrom<RawExistenceResult> for ExistenceResult {
    type Error = String;

    fn try_from(raw: RawExistenceResult) -> Result<Self, Self::Error> {
        if raw.exists {
            if raw.title.is_empty() || raw.channel.is_empty() {
                return Err(format!("existing video {} is missing metadata", raw.id));
            }
            Ok(Self {
                id: raw.id,
                exists: true,
                title: raw.title,
                channel: raw.channel,
            })
        } else {
            if !raw.title.is_empty() || !raw.channel.is_empty() {
                return Err(format!("missing video {} carries metadata", raw.id));
            }
            Ok(Self::missing(raw.id))
        }
    }
}

/// One result per distinct requested identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultMap {
    entries: HashMap<String, ExistenceResult>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a result keyed by its own id; an existing entry is replaced
    pub(crate) fn insert(&mut self, result: ExistenceResult) {
        self.entries.insert(result.id.clone(), result);
    }

    pub fn get(&self, id: &str) -> Option<&ExistenceResult> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Shorthand for `get(id).map(ExistenceResult::exists)`
    pub fn exists(&self, id: &str) -> Option<bool> {
        self.entries.get(id).map(ExistenceResult::exists)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose video exists
    pub fn exists_count(&self) -> usize {
        self.entries.values().filter(|r| r.exists).count()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, ExistenceResult> {
        self.entries.iter()
    }

    pub fn values(&self) -> hash_map::Values<'_, String, ExistenceResult> {
        self.entries.values()
    }
}

impl FromIterator<ExistenceResult> for ResultMap {
    fn from_iter<I: IntoIterator<Item = ExistenceResult>>(iter: I) -> Self {
        let mut map = Self::new();
        for result in iter {
            map.insert(result);
        }
        map
    }
}

impl IntoIterator for ResultMap {
    type Item = (String, ExistenceResult);
    type IntoIter = hash_map::IntoIter<String, ExistenceResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultMap {
    type Item = (&'a String, &'a ExistenceResult);
    type IntoIter = hash_map::Iter<'a, String, ExistenceResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
