//! Integration tests for vidcheck
//!
//! These tests run the real HTTP client against a wiremock server and the
//! real in-memory cache.

pub mod batch_validation_tests;
pub mod config_tests;
pub mod upstream_client_tests;
