//! Configuration validators
//!
//! Validation implementations for FreightConfig and its sections.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for FreightConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating freight configuration");

        self.pricing.validate()?;
        self.logging.validate()?;

        if let Some(file) = &self.rates.file {
            if file.as_os_str().is_empty() {
                return Err("Rates file path cannot be empty".to_string());
            }
        }

        debug!("Freight configuration validation completed");
        Ok(())
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.currency.trim().is_empty() {
            return Err("Currency cannot be empty".to_string());
        }

        if !self.default_clearance_cost.is_finite() || self.default_clearance_cost < 0.0 {
            return Err(format!(
                "Default clearance cost must be a non-negative number, got {}",
                self.default_clearance_cost
            ));
        }

        for (vehicle_type, cost) in &self.delivery_rates {
            if vehicle_type.trim().is_empty() {
                return Err("Delivery vehicle type cannot be empty".to_string());
            }
            if !cost.is_finite() || *cost < 0.0 {
                return Err(format!(
                    "Delivery rate for {} must be a non-negative number, got {}",
                    vehicle_type, cost
                ));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
