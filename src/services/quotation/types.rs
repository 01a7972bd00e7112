//! Type definitions for the quotation service

use crate::core::cost::{AdditionalCharge, CargoUnit, CostBreakdown, format_money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A shipment to be quoted, as read from a YAML or JSON request file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Destination name in the rate book
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Cargo units (pallets) in the shipment
    #[serde(default, alias = "pallets")]
    pub units: Vec<CargoUnit>,
    /// Whether last-mile delivery is required
    #[serde(default)]
    pub delivery_required: bool,
    /// Delivery vehicle type (e.g., "4wheel", "6wheel")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    /// Customs clearance cost; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearance_cost: Option<f64>,
    /// Extra cost lines
    #[serde(default)]
    pub additional_charges: Vec<AdditionalCharge>,
    /// Free-form notes carried onto the quotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShipmentRequest {
    pub fn new(units: Vec<CargoUnit>) -> Self {
        Self {
            units,
            ..Default::default()
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_delivery(mut self, vehicle_type: impl Into<String>) -> Self {
        self.delivery_required = true;
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn with_clearance_cost(mut self, clearance_cost: f64) -> Self {
        self.clearance_cost = Some(clearance_cost);
        self
    }

    pub fn with_charge(mut self, charge: AdditionalCharge) -> Self {
        self.additional_charges.push(charge);
        self
    }
}

/// A priced quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: Uuid,
    pub destination: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub breakdown: CostBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Quotation {
    /// Grand total with thousands separators and currency code
    pub fn formatted_total(&self) -> String {
        format_money(self.breakdown.total_cost, &self.currency)
    }
}

/// Rate book statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct RateBookStatistics {
    /// Number of destinations in the rate book
    pub total_destinations: usize,
    /// Number of tiers across all destinations
    pub total_tiers: usize,
    /// Per-kg rate range for each destination with tiers
    pub rate_ranges: HashMap<String, RateRange>,
}

/// Lowest and highest per-kg rate of a destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

/// Rate book change notification
#[derive(Debug, Clone)]
pub struct RateBookEvent {
    /// Type of change
    pub event_type: RateBookEventType,
    /// Destination affected, `None` for a full reload
    pub destination: Option<String>,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Types of rate book changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBookEventType {
    /// Tiers of a destination were added or replaced
    DestinationUpdated,
    /// A destination was removed
    DestinationRemoved,
    /// The whole rate book was reloaded from its source
    Reloaded,
}
