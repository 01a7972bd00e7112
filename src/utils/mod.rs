//! Utility modules
//!
//! - **error**: Crate error type and result alias
//! - **logging**: `tracing` subscriber setup for the binary

pub mod error;
pub mod logging;
