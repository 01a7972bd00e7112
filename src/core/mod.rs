//! Core functionality for freight quotations
//!
//! This module contains the pricing engine and its data structures.

pub mod cost; // Freight cost calculation pipeline
