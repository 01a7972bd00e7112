//! Pricing configuration models
//!
//! Defaults applied to every quotation: currency, customs clearance and
//! last-mile delivery rates

use super::*;
use crate::core::cost::DeliveryOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Global pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Quotation currency (e.g., "THB", "USD")
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Clearance cost used when a request does not specify one
    #[serde(default = "default_clearance_cost")]
    pub default_clearance_cost: f64,
    /// Flat delivery cost per vehicle type
    #[serde(default = "default_delivery_rates")]
    pub delivery_rates: HashMap<String, f64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_clearance_cost: default_clearance_cost(),
            delivery_rates: default_delivery_rates(),
        }
    }
}

impl PricingConfig {
    /// Delivery options for a request, using the configured vehicle rates
    pub fn delivery_options(&self, required: bool, vehicle_type: Option<String>) -> DeliveryOptions {
        DeliveryOptions {
            required,
            vehicle_type,
            rates: self.delivery_rates.clone(),
        }
    }

    /// Add or replace the flat rate of a vehicle type
    pub fn set_delivery_rate(&mut self, vehicle_type: impl Into<String>, cost: f64) {
        self.delivery_rates.insert(vehicle_type.into(), cost);
    }

    /// Vehicle types sorted by name
    pub fn vehicle_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.delivery_rates.keys().map(|k| k.as_str()).collect();
        types.sort_unstable();
        types
    }

    pub fn merge(mut self, other: Self) -> Self {
        if other.currency != default_currency() {
            self.currency = other.currency;
        }
        if other.default_clearance_cost != default_clearance_cost() {
            self.default_clearance_cost = other.default_clearance_cost;
        }
        // Only entries that differ from the defaults override the base map
        let defaults = default_delivery_rates();
        self.delivery_rates.extend(
            other
                .delivery_rates
                .into_iter()
                .filter(|(vehicle, cost)| defaults.get(vehicle) != Some(cost)),
        );
        self
    }
}
