//! Configuration and input validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: Configuration validators (FreightConfig, PricingConfig, LoggingConfig)
//! - `shipment_validators`: Shipment input validators (cargo units, rate tiers, charges)
//! - `tests`: Test suite for all validators

mod config_validators;
mod shipment_validators;
mod trait_def;

pub use trait_def::Validate;
