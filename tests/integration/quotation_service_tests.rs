//! Quotation service integration tests
//!
//! File-backed rate books, configuration wiring and concurrent access.

#[cfg(test)]
mod tests {
    use crate::common::{CargoFactory, RateCards};
    use crate::{assert_err, assert_ok};
    use freight_calc::config::{Config, PricingConfig};
    use freight_calc::core::cost::{AdditionalCharge, RateTier};
    use freight_calc::services::{QuotationService, RateBook, ShipmentRequest};
    use freight_calc::utils::error::FreightError;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn rate_book_file() -> NamedTempFile {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(RateCards::book_yaml().as_bytes()).unwrap();
        file
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_yaml_rate_book_matches_fixture() {
        let file = rate_book_file();
        let book = assert_ok!(RateBook::load_from_file(file.path()).await);

        assert_eq!(book.destinations(), vec!["Australia", "Lisbon", "Switzerland"]);
        assert_eq!(book.tiers_for("Lisbon").unwrap(), RateCards::lisbon().as_slice());

        let swiss = book.tiers_for("Switzerland").unwrap();
        assert_eq!(swiss[0].rate, 411.0);
        assert!(swiss[2].effective_date.is_some());
    }

    #[tokio::test]
    async fn test_json_rate_book_round_trip() {
        let book = RateCards::book();
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(serde_json::to_string(&book).unwrap().as_bytes())
            .unwrap();

        let loaded = assert_ok!(RateBook::load_from_file(file.path()).await);
        assert_eq!(loaded, book);
    }

    #[tokio::test]
    async fn test_malformed_rate_book() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"Lisbon: [1, 2, 3]\n").unwrap();

        let err = assert_err!(RateBook::load_from_file(file.path()).await);
        assert!(matches!(err, FreightError::Parsing(_)));
    }

    #[tokio::test]
    async fn test_service_from_config() {
        let file = rate_book_file();
        let mut config = Config::default();
        config.freight.rates.file = Some(file.path().to_path_buf());
        config.freight.pricing.currency = "USD".to_string();

        let service = assert_ok!(QuotationService::from_config(&config).await);
        let stats = service.get_statistics();

        assert_eq!(stats.total_destinations, 3);
        assert_eq!(stats.total_tiers, 8);
        assert_eq!(stats.rate_ranges["Switzerland"].max, 411.0);

        let request = ShipmentRequest::new(vec![CargoFactory::standard_pallet()])
            .with_destination("switzerland");
        let quotation = assert_ok!(service.quote(&request));
        assert_eq!(quotation.currency, "USD");
        assert_eq!(quotation.destination, "switzerland");
    }

    // ==================== Quoting ====================

    #[test]
    fn test_quote_full_request() {
        let service = QuotationService::new(RateCards::book(), PricingConfig::default());
        let request = ShipmentRequest::new(vec![
            CargoFactory::standard_pallet(),
            CargoFactory::euro_pallet(),
        ])
        .with_destination("Australia")
        .with_delivery("6wheel")
        .with_charge(AdditionalCharge::new("Documentation", 800.0));

        let quotation = assert_ok!(service.quote(&request));
        let breakdown = &quotation.breakdown;

        // 261 × 250 + 300 × 250
        assert_eq!(breakdown.total_freight_cost, 140250.0);
        assert_eq!(breakdown.delivery_cost, 6500.0);
        assert_eq!(breakdown.clearance_cost, 5350.0);
        assert_eq!(breakdown.total_cost, 152900.0);
        assert_eq!(quotation.formatted_total(), "152,900 THB");
    }

    #[test]
    fn test_quote_unknown_destination() {
        let service = QuotationService::new(RateCards::book(), PricingConfig::default());
        let request = ShipmentRequest::new(vec![CargoFactory::euro_pallet()]).with_destination("Mars");

        let err = assert_err!(service.quote(&request));
        assert!(matches!(err, FreightError::NotFound(_)));
        assert!(err.is_user_error());
    }

    // ==================== Concurrency ====================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_quotes_during_updates() {
        let service = QuotationService::new(RateCards::book(), PricingConfig::default());
        let request = ShipmentRequest::new(vec![CargoFactory::euro_pallet()]).with_destination("Lisbon");

        let mut handles = Vec::new();
        for i in 0..16 {
            let service = service.clone();
            let request = request.clone();
            handles.push(tokio::spawn(async move {
                if i % 4 == 0 {
                    service.set_tiers(format!("Extra {}", i), vec![RateTier::from_weight(0.0, 100.0)]);
                }
                service.quote(&request).map(|q| q.breakdown.total_freight_cost)
            }));
        }

        for handle in handles {
            let freight = assert_ok!(handle.await.unwrap());
            assert_eq!(freight, 57000.0);
        }
        assert_eq!(service.destinations().len(), 7);
    }
}
