//! Wire types for the `videos.list` endpoint

use crate::core::types::{FoundVideos, VideoMetadata};
use serde::Deserialize;
use std::collections::HashSet;

/// Successful `videos.list` response
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
}

impl VideoListResponse {
    /// Metadata for every returned item that was actually requested
    pub fn into_found(self, requested: &[String]) -> FoundVideos {
        let requested: HashSet<&str> = requested.iter().map(String::as_str).collect();
        self.items
            .into_iter()
            .filter(|item| requested.contains(item.id.as_str()))
            .map(|item| {
                let snippet = item.snippet.unwrap_or_default();
                (
                    item.id,
                    VideoMetadata::new(snippet.title, snippet.channel_title),
                )
            })
            .collect()
    }
}

/// Google API error envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn has_reason(&self, candidates: &[&str]) -> bool {
        self.errors
            .iter()
            .filter_map(|detail| detail.reason.as_deref())
            .any(|reason| candidates.contains(&reason))
    }

    pub fn has_domain(&self, domain: &str) -> bool {
        self.errors
            .iter()
            .any(|detail| detail.domain.as_deref() == Some(domain))
    }
}
