//! Main quotation service implementation

use super::rate_book::RateBook;
use super::types::{
    Quotation, RateBookEvent, RateBookEventType, RateBookStatistics, ShipmentRequest,
};
use crate::config::{Config, PricingConfig};
use crate::core::cost::{RateTier, compute_cost_breakdown};
use crate::utils::error::{FreightError, Result};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

/// Quotation service backed by a shared rate book
#[derive(Debug, Clone)]
pub struct QuotationService {
    /// Destination rate tiers
    pub(super) rate_book: Arc<RwLock<RateBook>>,
    /// Currency, default clearance and delivery rates
    pub(super) pricing: PricingConfig,
    /// Event broadcaster for rate book changes
    pub(super) event_sender: broadcast::Sender<RateBookEvent>,
}

impl QuotationService {
    /// Create a new quotation service
    pub fn new(rate_book: RateBook, pricing: PricingConfig) -> Self {
        let (event_sender, _) = broadcast::channel(64);

        info!(
            "Quotation service initialized with {} destinations ({})",
            rate_book.len(),
            pricing.currency
        );

        Self {
            rate_book: Arc::new(RwLock::new(rate_book)),
            pricing,
            event_sender,
        }
    }

    /// Build the service from configuration, loading the rate book file when one is set
    pub async fn from_config(config: &Config) -> Result<Self> {
        let rate_book = match &config.rates().file {
            Some(path) => RateBook::load_from_file(path).await?,
            None => {
                debug!("No rate book file configured, starting with an empty rate book");
                RateBook::new()
            }
        };
        Ok(Self::new(rate_book, config.pricing().clone()))
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Tiers of a destination
    pub fn tiers_for(&self, destination: &str) -> Option<Vec<RateTier>> {
        self.rate_book.read().tiers_for(destination).map(<[RateTier]>::to_vec)
    }

    /// Destination names sorted alphabetically
    pub fn destinations(&self) -> Vec<String> {
        self.rate_book
            .read()
            .destinations()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Add or replace the tiers of a destination
    pub fn set_tiers(&self, destination: impl Into<String>, tiers: Vec<RateTier>) {
        let destination = destination.into();
        self.rate_book.write().set_tiers(destination.clone(), tiers);
        debug!("Updated rate tiers for {}", destination);
        self.notify(RateBookEventType::DestinationUpdated, Some(destination));
    }

    /// Remove a destination, returning whether it existed
    pub fn remove_destination(&self, destination: &str) -> bool {
        let removed = self.rate_book.write().remove_destination(destination).is_some();
        if removed {
            debug!("Removed destination {}", destination);
            self.notify(
                RateBookEventType::DestinationRemoved,
                Some(destination.to_string()),
            );
        }
        removed
    }

    pub fn get_statistics(&self) -> RateBookStatistics {
        self.rate_book.read().statistics()
    }

    /// Price a shipment request
    ///
    /// The request must name a destination present in the rate book. When it
    /// carries no clearance cost the configured default applies.
    pub fn quote(&self, request: &ShipmentRequest) -> Result<Quotation> {
        let destination = request
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| FreightError::validation("Shipment request has no destination"))?;

        let tiers = self.tiers_for(destination).ok_or_else(|| {
            FreightError::not_found(format!("No rates for destination: {}", destination))
        })?;

        let delivery = self
            .pricing
            .delivery_options(request.delivery_required, request.vehicle_type.clone());
        let clearance_cost = request
            .clearance_cost
            .unwrap_or(self.pricing.default_clearance_cost);

        let breakdown = compute_cost_breakdown(
            &request.units,
            &tiers,
            &delivery,
            clearance_cost,
            &request.additional_charges,
        );

        let quotation = Quotation {
            id: Uuid::new_v4(),
            destination: destination.to_string(),
            currency: self.pricing.currency.clone(),
            created_at: Utc::now(),
            breakdown,
            notes: request.notes.clone(),
        };

        info!(
            "Quotation {} for {}: {}",
            quotation.id,
            quotation.destination,
            quotation.formatted_total()
        );
        Ok(quotation)
    }
}
