//! Batch validator
//!
//! Orchestrates one validation call: dedupe, cache resolve, chunk the misses,
//! fan the chunks out to the upstream with bounded concurrency, merge, write
//! through to the cache.

mod batch;
mod options;


pub use batch::BatchValidator;
pub use options::BatchOptions;
