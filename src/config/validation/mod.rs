//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `validators`: Implementations for every configuration section
//! - `tests`: Test suite for all validators

mod trait_def;
mod validators;

pub use trait_def::Validate;
