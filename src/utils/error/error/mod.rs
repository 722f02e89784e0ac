//! Error handling for the validator
//!
//! This module defines the error type surfaced to callers of the crate.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{CheckError, Result};
