//! Configuration integration tests
//!
//! Loading from files, environment-style overrides and validation.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use freight_calc::config::{Config, FreightConfig, Validate, merge_configs};
    use freight_calc::utils::error::FreightError;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const FILE_CONFIG: &str = r#"
pricing:
  currency: USD
  default_clearance_cost: 6000
  delivery_rates:
    4wheel: 3600
    6wheel: 6500
rates:
  file: /srv/freight/rates.yaml
"#;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_file_then_environment_overrides() {
        let file = config_file(FILE_CONFIG);
        let from_file = assert_ok!(Config::from_file(file.path()).await);

        let freight = assert_ok!(from_file.freight.apply_vars(env(&[
            ("FREIGHT_CLEARANCE_COST", "4500"),
            ("FREIGHT_DELIVERY_RATE_VAN", "2800"),
        ])));
        let config = Config { freight };

        assert_eq!(config.pricing().currency, "USD");
        assert_eq!(config.pricing().default_clearance_cost, 4500.0);
        assert_eq!(config.pricing().delivery_rates.get("van"), Some(&2800.0));
        assert_eq!(config.pricing().delivery_rates.get("4wheel"), Some(&3600.0));
        assert_eq!(
            config.rates().file,
            Some(PathBuf::from("/srv/freight/rates.yaml"))
        );
        assert_ok!(config.validate());
    }

    #[tokio::test]
    async fn test_environment_can_set_default_values() {
        let file = config_file(FILE_CONFIG);
        let from_file = assert_ok!(Config::from_file(file.path()).await);

        let freight = assert_ok!(from_file.freight.apply_vars(env(&[
            ("FREIGHT_CURRENCY", "THB"),
            ("FREIGHT_CLEARANCE_COST", "5350"),
        ])));

        assert_eq!(freight.pricing.currency, "THB");
        assert_eq!(freight.pricing.default_clearance_cost, 5350.0);
        assert_eq!(freight.pricing.delivery_rates.get("4wheel"), Some(&3600.0));
    }

    #[tokio::test]
    async fn test_merge_keeps_file_delivery_rates() {
        let file = config_file(FILE_CONFIG);
        let from_file = assert_ok!(Config::from_file(file.path()).await);

        let overlay = assert_ok!(FreightConfig::from_vars(env(&[(
            "FREIGHT_DELIVERY_RATE_10WHEEL",
            "9800"
        )])));
        let merged = from_file.merge(Config { freight: overlay });

        assert_eq!(merged.pricing().delivery_rates.get("4wheel"), Some(&3600.0));
        assert_eq!(merged.pricing().delivery_rates.get("10wheel"), Some(&9800.0));
        assert_eq!(merged.pricing().default_clearance_cost, 6000.0);
    }

    #[tokio::test]
    async fn test_invalid_delivery_rate_rejected() {
        let file = config_file("pricing:\n  delivery_rates:\n    4wheel: -3500\n");

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, FreightError::Config(msg) if msg.contains("4wheel")));
    }

    #[tokio::test]
    async fn test_unparseable_config_rejected() {
        let file = config_file("pricing: [not, a, map]\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, FreightError::Config(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.freight.pricing.set_delivery_rate("10wheel", 9800.0);
        config.freight.logging.json = true;

        let yaml = assert_ok!(config.to_yaml());
        let parsed: FreightConfig = assert_ok!(serde_yaml::from_str(&yaml));
        assert_eq!(parsed, config.freight);
    }

    #[test]
    fn test_merge_configs_in_order() {
        let mut first = FreightConfig::default();
        first.pricing.currency = "USD".to_string();
        let mut second = FreightConfig::default();
        second.pricing.currency = "EUR".to_string();

        let merged = merge_configs(FreightConfig::default(), vec![first, second]);
        assert_eq!(merged.pricing.currency, "EUR");
        assert_ok!(merged.validate());
    }
}
