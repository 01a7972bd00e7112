//! Quotation service
//!
//! Keeps the per-destination rate book and turns shipment requests into
//! priced quotations

mod events;
mod loader;
mod rate_book;
mod service;
mod types;


// Re-export public types
pub use rate_book::RateBook;
pub use service::QuotationService;
pub use types::{
    Quotation, RateBookEvent, RateBookEventType, RateBookStatistics, RateRange, ShipmentRequest,
};
