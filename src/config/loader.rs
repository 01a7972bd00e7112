//! Configuration loading utilities
//!
//! This module provides utilities for loading configuration from the environment.

use super::models::*;
use crate::utils::error::{FreightError, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;

const ENV_PREFIX: &str = "FREIGHT_";
const DELIVERY_RATE_PREFIX: &str = "FREIGHT_DELIVERY_RATE_";

impl FreightConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Load configuration from `FREIGHT_*` key/value pairs over the defaults
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::default().apply_vars(vars)
    }

    /// Override this configuration with the `FREIGHT_*` environment variables
    pub fn apply_env(self) -> Result<Self> {
        debug!("Applying configuration from environment variables");
        self.apply_vars(env::vars())
    }

    /// Override this configuration with `FREIGHT_*` key/value pairs
    ///
    /// Recognised keys: `FREIGHT_CURRENCY`, `FREIGHT_CLEARANCE_COST`,
    /// `FREIGHT_RATES_FILE`, `FREIGHT_LOG_LEVEL`, `FREIGHT_LOG_JSON` and
    /// `FREIGHT_DELIVERY_RATE_<VEHICLE>`. Other keys are ignored. Only the
    /// keys present are applied, and a present key always wins, even when it
    /// repeats a default value.
    pub fn apply_vars<I>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut delivery_overrides = 0usize;

        for (key, value) in vars {
            if !key.starts_with(ENV_PREFIX) {
                continue;
            }

            match key.as_str() {
                "FREIGHT_CURRENCY" => self.pricing.currency = value.trim().to_uppercase(),
                "FREIGHT_CLEARANCE_COST" => {
                    self.pricing.default_clearance_cost = value.trim().parse().map_err(|e| {
                        FreightError::config(format!("Invalid clearance cost: {}", e))
                    })?;
                }
                "FREIGHT_RATES_FILE" => self.rates.file = Some(PathBuf::from(value)),
                "FREIGHT_LOG_LEVEL" => self.logging.level = value,
                "FREIGHT_LOG_JSON" => {
                    self.logging.json = value.trim().parse().map_err(|e| {
                        FreightError::config(format!("Invalid log json flag: {}", e))
                    })?;
                }
                _ => {
                    if let Some(vehicle) = key.strip_prefix(DELIVERY_RATE_PREFIX) {
                        let cost: f64 = value.trim().parse().map_err(|e| {
                            FreightError::config(format!(
                                "Invalid delivery rate for {}: {}",
                                vehicle, e
                            ))
                        })?;
                        self.pricing.set_delivery_rate(vehicle.to_lowercase(), cost);
                        delivery_overrides += 1;
                    }
                }
            }
        }

        if delivery_overrides > 0 {
            debug!("Applied {} delivery rates from environment", delivery_overrides);
        }
        Ok(self)
    }
}

/// Merge configuration from multiple sources
pub fn merge_configs(base: FreightConfig, overrides: Vec<FreightConfig>) -> FreightConfig {
    overrides.into_iter().fold(base, |acc, config| acc.merge(config))
}
