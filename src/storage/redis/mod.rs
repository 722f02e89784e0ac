//! Redis storage implementation
//!
//! ## Module Structure
//!
//! - `pool` - Connection management, health checks and no-op mode
//! - `cache` - Single-key operations (get, set with expiry, delete, ttl)
//! - `batch` - Multi-key operations (mget, pipelined setex)
//! - `store` - `ExistenceStore` implementation
//! - `tests` - Module tests

mod batch;
mod cache;
mod pool;
mod store;

pub use pool::{RedisConnection, RedisPool};
