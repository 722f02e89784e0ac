//! Core validation pipeline
//!
//! This module contains the value types, the collaborator seams and the
//! pieces the batch validator composes.

pub mod cache_resolver;
pub mod chunker; // Dedupe and fixed-size chunking
pub mod merger; // Pure merge of cache hits and chunk outcomes
pub mod traits;
pub mod types;
pub mod upstream;
pub mod validator;

pub use cache_resolver::CacheResolver;
pub use upstream::HttpUpstreamClient;
pub use validator::{BatchOptions, BatchValidator};
