//! Common test utilities for freight-calc
//!
//! - Rate card and cargo fixtures
//! - Custom assertions and helpers

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{CargoFactory, RateCards};

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
