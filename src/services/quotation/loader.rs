//! Rate book loading for the quotation service

use super::rate_book::RateBook;
use super::service::QuotationService;
use super::types::{RateBookEventType, ShipmentRequest};
use crate::config::Validate;
use crate::utils::error::{FreightError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

impl RateBook {
    /// Parse a rate book from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| FreightError::parsing(format!("Failed to parse rate book YAML: {}", e)))
    }

    /// Parse a rate book from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| FreightError::parsing(format!("Failed to parse rate book JSON: {}", e)))
    }

    /// Load a rate book file; `.json` files are read as JSON, anything else as YAML
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FreightError::config(format!("Failed to read rate book {:?}: {}", path, e))
        })?;

        let book = if is_json_file(path) {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        book.warn_invalid_tiers();
        debug!("Loaded {} destinations from {:?}", book.len(), path);
        Ok(book)
    }

    /// Log tiers that would fail validation; they stay in the book
    fn warn_invalid_tiers(&self) {
        for destination in self.destinations() {
            let Some(tiers) = self.tiers_for(destination) else {
                continue;
            };
            if tiers.is_empty() {
                warn!("Destination {} has no rate tiers", destination);
            }
            for (index, tier) in tiers.iter().enumerate() {
                if let Err(e) = tier.validate() {
                    warn!("Destination {} tier #{}: {}", destination, index + 1, e);
                }
            }
        }
    }
}

impl ShipmentRequest {
    /// Load a shipment request file; `.json` files are read as JSON, anything else as YAML
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;

        let request: Self = if is_json_file(path) {
            serde_json::from_str(&content).map_err(|e| {
                FreightError::parsing(format!("Failed to parse shipment JSON: {}", e))
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                FreightError::parsing(format!("Failed to parse shipment YAML: {}", e))
            })?
        };

        debug!(
            "Loaded shipment with {} cargo units from {:?}",
            request.units.len(),
            path
        );
        Ok(request)
    }
}

impl QuotationService {
    /// Replace the rate book with the contents of a file
    ///
    /// The current book is kept when loading fails.
    pub async fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let book = RateBook::load_from_file(path).await?;
        let destinations = book.len();

        *self.rate_book.write() = book;
        self.notify(RateBookEventType::Reloaded, None);

        info!(
            "Rate book reloaded from {:?} ({} destinations)",
            path, destinations
        );
        Ok(())
    }
}
