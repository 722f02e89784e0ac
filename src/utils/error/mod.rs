//! Error handling utilities
//!
//! This module provides the crate error type and the retry machinery used around
//! upstream calls.

pub mod error;
pub mod recovery;

// Re-export commonly used types
pub use error::*;
pub use recovery::*;
