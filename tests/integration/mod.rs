//! Integration tests for freight-calc
//!
//! These tests exercise the public API across modules without mocking.

pub mod config_tests;
pub mod quotation_service_tests;
