//! Utility modules
//!
//! - **error**: Error type, helpers and retry recovery
//! - **logging**: Subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup
