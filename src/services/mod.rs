//! Services module
//!
//! This module contains business logic and service implementations

pub mod quotation;

pub use quotation::{
    Quotation, QuotationService, RateBook, RateBookEvent, RateBookEventType, RateBookStatistics,
    RateRange, ShipmentRequest,
};
