//! Validation trait definition
//!
//! This module defines the core Validate trait used by configuration and
//! shipment input structures.

/// Validation trait for configuration and input structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), String> {
        self.iter().try_for_each(Validate::validate)
    }
}
