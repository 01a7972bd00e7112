//! Configuration data models
//!
//! This module defines all configuration structures used by the quotation engine.

pub mod freight;
pub mod logging;
pub mod pricing;
pub mod rates;

// Re-export all configuration types
pub use freight::*;
pub use logging::*;
pub use pricing::*;
pub use rates::*;

use std::collections::HashMap;

/// Default quotation currency
pub fn default_currency() -> String {
    "THB".to_string()
}

/// Default customs clearance fee per shipment
pub fn default_clearance_cost() -> f64 {
    5350.0
}

/// Default flat delivery cost per vehicle type
pub fn default_delivery_rates() -> HashMap<String, f64> {
    HashMap::from([
        ("4wheel".to_string(), 3500.0),
        ("6wheel".to_string(), 6500.0),
    ])
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}
