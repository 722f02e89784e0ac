//! Core value types
//!
//! Results are immutable once built; every constructor enforces the
//! `exists` / metadata invariant.

mod outcome;
mod report;
mod result;

pub use outcome::{ChunkOutcome, FailureReason, FoundVideos, VideoMetadata};
pub use report::BatchReport;
pub use result::{
    ExistenceResult, PLACEHOLDER_CHANNEL, PLACEHOLDER_TITLE, ResultMap,
};
