//! Cache resolver
//!
//! Partitions identifiers into cached results and misses, and writes fresh
//! results back with a TTL that depends on whether the video exists. The
//! backend is an optimization only: every backend failure degrades to misses
//! on read and to a dropped write on store.

mod keys;
mod resolver;
mod ttl;
mod types;


pub use keys::CacheKeyBuilder;
pub use resolver::CacheResolver;
pub use ttl::TtlPolicy;
pub use types::{CachedEntry, ResolverStats};
