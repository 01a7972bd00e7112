//! Error handling for freight quotations
//!
//! This module defines the error type used throughout the crate.

mod helpers;
mod types;

pub use types::{FreightError, Result};
