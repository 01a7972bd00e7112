//! Main freight configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main freight configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FreightConfig {
    /// Pricing defaults
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Rate book source
    #[serde(default)]
    pub rates: RatesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FreightConfig {
    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.pricing = self.pricing.merge(other.pricing);
        self.rates = self.rates.merge(other.rates);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
