//! Upstream video lookup service
//!
//! ## Module Structure
//!
//! - `client` - reqwest client for the `videos.list` endpoint
//! - `error` - Failure classification and HTTP error mapping
//! - `models` - Wire types for responses and error bodies

mod client;
mod error;
mod models;


pub use client::HttpUpstreamClient;
pub use error::{LookupError, UpstreamErrorMapper};
pub use models::{ApiError, ApiErrorBody, ApiErrorDetail, Snippet, VideoItem, VideoListResponse};
