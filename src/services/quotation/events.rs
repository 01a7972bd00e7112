//! Event subscription functionality for the quotation service

use super::service::QuotationService;
use super::types::{RateBookEvent, RateBookEventType};
use chrono::Utc;
use tokio::sync::broadcast;

impl QuotationService {
    /// Subscribe to rate book change events
    pub fn subscribe_to_updates(&self) -> broadcast::Receiver<RateBookEvent> {
        self.event_sender.subscribe()
    }

    pub(super) fn notify(&self, event_type: RateBookEventType, destination: Option<String>) {
        // No subscribers is not an error
        let _ = self.event_sender.send(RateBookEvent {
            event_type,
            destination,
            timestamp: Utc::now(),
        });
    }
}
