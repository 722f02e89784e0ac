//! Common test utilities for vidcheck
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, upstream};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = wiremock::MockServer::start().await;
//!     let config = fixtures::upstream_config(&server.uri());
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod upstream;

pub use fixtures::{test_config, upstream_config, video_ids};
pub use upstream::{KnownVideos, error_body, quota_error_body};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
