//! Shipment input validators
//!
//! Strict checks for cargo units, rate tiers and charges. The cost
//! calculator itself never calls these; it degrades instead.

use super::trait_def::Validate;
use crate::core::cost::{AdditionalCharge, CargoUnit, RateTier};
use crate::services::quotation::ShipmentRequest;

fn non_negative(value: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "{} must be a non-negative number, got {}",
            field, value
        ));
    }
    Ok(())
}

impl Validate for CargoUnit {
    fn validate(&self) -> Result<(), String> {
        non_negative(self.length, "Length")?;
        non_negative(self.width, "Width")?;
        non_negative(self.height, "Height")?;
        non_negative(self.weight, "Weight")?;

        if self.quantity < 1 {
            return Err("Quantity must be at least 1".to_string());
        }

        if let Some(rate) = self.rate_override {
            non_negative(rate, "Rate override")?;
        }

        Ok(())
    }
}

impl Validate for RateTier {
    fn validate(&self) -> Result<(), String> {
        if let Some(min) = self.min_weight {
            non_negative(min, "Minimum weight")?;
        }
        if let Some(max) = self.max_weight {
            non_negative(max, "Maximum weight")?;
        }

        if let (Some(min), Some(max)) = (self.min_weight, self.max_weight) {
            if min > max {
                return Err(format!(
                    "Minimum weight {} cannot exceed maximum weight {}",
                    min, max
                ));
            }
        }

        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(format!("Rate must be greater than 0, got {}", self.rate));
        }

        Ok(())
    }
}

impl Validate for AdditionalCharge {
    fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Additional charge description cannot be empty".to_string());
        }
        if !self.amount.is_finite() {
            return Err(format!(
                "Additional charge '{}' has an invalid amount",
                self.description
            ));
        }
        Ok(())
    }
}

impl Validate for ShipmentRequest {
    fn validate(&self) -> Result<(), String> {
        for (index, unit) in self.units.iter().enumerate() {
            unit.validate()
                .map_err(|e| format!("Cargo unit #{}: {}", index + 1, e))?;
        }

        if let Some(clearance) = self.clearance_cost {
            non_negative(clearance, "Clearance cost")?;
        }

        self.additional_charges.validate()?;

        if self.delivery_required
            && self
                .vehicle_type
                .as_deref()
                .is_none_or(|v| v.trim().is_empty())
        {
            return Err("Delivery requires a vehicle type".to_string());
        }

        Ok(())
    }
}
