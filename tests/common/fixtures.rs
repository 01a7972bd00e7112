//! Test fixtures and data factories
//!
//! Published rate cards and typical export pallets. All factories create
//! real objects, not mocks.

use freight_calc::core::cost::{CargoUnit, RateTier};
use freight_calc::services::RateBook;

/// Factory for destination rate cards
pub struct RateCards;

impl RateCards {
    /// Australia: 100-499 kg at 250, 500-999 kg at 240
    pub fn australia() -> Vec<RateTier> {
        vec![
            RateTier::new(100.0, 499.0, 250.0),
            RateTier::new(500.0, 999.0, 240.0),
        ]
    }

    /// Lisbon: 100-299 kg at 195, 300-499 kg at 190, 500-9999 kg at 185
    pub fn lisbon() -> Vec<RateTier> {
        vec![
            RateTier::new(100.0, 299.0, 195.0),
            RateTier::new(300.0, 499.0, 190.0),
            RateTier::new(500.0, 9999.0, 185.0),
        ]
    }

    /// Switzerland: 45-99 kg at 411, 100-249 kg at 301, 250-9999 kg at 271
    pub fn switzerland() -> Vec<RateTier> {
        vec![
            RateTier::new(45.0, 99.0, 411.0),
            RateTier::new(100.0, 249.0, 301.0),
            RateTier::new(250.0, 9999.0, 271.0),
        ]
    }

    /// Rate book with all three destinations
    pub fn book() -> RateBook {
        let mut book = RateBook::new();
        book.set_tiers("Australia", Self::australia());
        book.set_tiers("Lisbon", Self::lisbon());
        book.set_tiers("Switzerland", Self::switzerland());
        book
    }

    /// The same rate book as YAML
    pub fn book_yaml() -> &'static str {
        r#"
Australia:
  - { min_weight: 100, max_weight: 499, rate: 250 }
  - { min_weight: 500, max_weight: 999, rate: 240 }
Lisbon:
  - { min_weight: 100, max_weight: 299, rate: 195 }
  - { min_weight: 300, max_weight: 499, rate: 190 }
  - { min_weight: 500, max_weight: 9999, rate: 185 }
Switzerland:
  - { min_weight: 45, max_weight: 99, base_rate: 411 }
  - { min_weight: 100, max_weight: 249, base_rate: 301 }
  - { min_weight: 250, max_weight: 9999, base_rate: 271, effective_date: 2024-03-01 }
"#
    }
}

/// Factory for cargo units
pub struct CargoFactory;

impl CargoFactory {
    /// 83 × 124 × 152 cm, 120 kg: volume weight 261 kg
    pub fn standard_pallet() -> CargoUnit {
        CargoUnit::new(83.0, 124.0, 152.0, 120.0)
    }

    /// 120 × 100 × 150 cm, 200 kg: volume weight 300 kg
    pub fn euro_pallet() -> CargoUnit {
        CargoUnit::new(120.0, 100.0, 150.0, 200.0)
    }

    /// 40 × 30 × 20 cm, 34 kg: volume weight 4 kg
    pub fn dense_crate() -> CargoUnit {
        CargoUnit::new(40.0, 30.0, 20.0, 34.0)
    }

    /// Pallet missing its height
    pub fn unmeasured_pallet() -> CargoUnit {
        CargoUnit::new(120.0, 100.0, 0.0, 150.0)
    }
}
