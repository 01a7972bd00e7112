//! Configuration management for the quotation engine
//!
//! This module handles loading, validation, and management of pricing,
//! rate book and logging configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::merge_configs;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{FreightError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the quotation engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Freight configuration
    pub freight: FreightConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FreightError::Config(format!("Failed to read config file: {}", e)))?;

        let freight: FreightConfig = serde_yaml::from_str(&content)
            .map_err(|e| FreightError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { freight };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let freight = FreightConfig::from_env()?;
        let config = Self { freight };

        config.validate()?;
        Ok(config)
    }

    /// Get pricing configuration
    pub fn pricing(&self) -> &PricingConfig {
        &self.freight.pricing
    }

    /// Get rate book configuration
    pub fn rates(&self) -> &RatesConfig {
        &self.freight.rates
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.freight.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.freight
            .pricing
            .validate()
            .map_err(|e| FreightError::Config(format!("Pricing config error: {}", e)))?;

        self.freight
            .logging
            .validate()
            .map_err(|e| FreightError::Config(format!("Logging config error: {}", e)))?;

        self.freight.validate().map_err(FreightError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.freight = self.freight.merge(other.freight);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.freight)
            .map_err(|e| FreightError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.freight)
            .map_err(|e| FreightError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
