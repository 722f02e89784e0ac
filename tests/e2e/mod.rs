//! End-to-end tests for vidcheck
//!
//! These tests call the live API and spend quota.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - VIDCHECK_API_KEY: API key for the video lookup service

pub mod live_lookup;
