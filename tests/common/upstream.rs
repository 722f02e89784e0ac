//! Mock upstream helpers

use serde_json::{Value, json};
use std::collections::HashMap;
use wiremock::{Request, Respond, ResponseTemplate};

/// Plays `videos.list` for a fixed catalogue
///
/// Answers with the requested ids that are in the catalogue, like the real
/// endpoint does.
#[derive(Debug, Clone, Default)]
pub struct KnownVideos {
    videos: HashMap<String, (String, String)>,
}

impl KnownVideos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, title: &str, channel: &str) -> Self {
        self.videos
            .insert(id.to_string(), (title.to_string(), channel.to_string()));
        self
    }

    pub fn with_ids<'a>(mut self, ids: impl IntoIterator<Item = &'a String>) -> Self {
        for id in ids {
            self.videos
                .insert(id.clone(), (format!("Title {}", id), "Test Channel".to_string()));
        }
        self
    }

    fn body_for(&self, requested: &[String]) -> Value {
        let items: Vec<Value> = requested
            .iter()
            .filter_map(|id| {
                self.videos.get(id).map(|(title, channel)| {
                    json!({
                        "kind": "youtube#video",
                        "id": id,
                        "snippet": { "title": title, "channelTitle": channel }
                    })
                })
            })
            .collect();
        let count = items.len();
        json!({
            "kind": "youtube#videoListResponse",
            "items": items,
            "pageInfo": { "totalResults": count, "resultsPerPage": count }
        })
    }
}

impl Respond for KnownVideos {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let requested: Vec<String> = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.split(',').map(str::to_string).collect())
            .unwrap_or_default();
        ResponseTemplate::new(200).set_body_json(self.body_for(&requested))
    }
}

/// Google API error body with one reason
pub fn error_body(code: u16, reason: &str, domain: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": format!("{} failure", reason),
            "errors": [{ "message": format!("{} failure", reason), "domain": domain, "reason": reason }]
        }
    })
}

/// The body `videos.list` returns once the daily quota is spent
pub fn quota_error_body() -> Value {
    error_body(403, "quotaExceeded", "youtube.quota")
}
