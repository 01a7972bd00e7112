//! Subcommand execution

use super::args::{Cli, Commands};
use super::output::{render_quotation, render_rates, render_volume_weight};
use crate::config::{Config, Validate};
use crate::core::cost::compute_volume_weight;
use crate::services::{QuotationService, ShipmentRequest};
use crate::utils::error::FreightError;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Resolve configuration: file (or defaults), then `FREIGHT_*` variables, then CLI flags
pub async fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    config.freight = config
        .freight
        .apply_env()
        .context("Invalid FREIGHT_* environment variable")?;

    if let Some(rates) = &cli.rates {
        config.freight.rates.file = Some(rates.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Run a subcommand and write its output
pub async fn execute<W: Write>(command: &Commands, config: &Config, out: &mut W) -> Result<()> {
    let rendered = match command {
        Commands::VolumeWeight {
            length,
            width,
            height,
        } => render_volume_weight(compute_volume_weight(*length, *width, *height)),
        Commands::Quote {
            destination,
            shipment,
            format,
        } => {
            let service = quotation_service(config).await?;
            let mut request = load_shipment(shipment).await?;
            if let Some(destination) = destination {
                request.destination = Some(destination.clone());
            }

            let quotation = service
                .quote(&request)
                .with_context(|| format!("Failed to quote {}", shipment.display()))?;
            render_quotation(&quotation, *format)?
        }
        Commands::Rates {
            destination,
            format,
        } => {
            let service = quotation_service(config).await?;
            let destinations = service.destinations();
            let currency = service.pricing().currency.as_str();

            match destination {
                Some(destination) => {
                    let tiers = service.tiers_for(destination).ok_or_else(|| {
                        FreightError::not_found(format!(
                            "No rates for destination: {}",
                            destination
                        ))
                    })?;
                    render_rates(
                        &destinations,
                        Some((destination.as_str(), tiers.as_slice())),
                        currency,
                        *format,
                    )?
                }
                None => render_rates(&destinations, None, currency, *format)?,
            }
        }
    };

    out.write_all(rendered.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

async fn quotation_service(config: &Config) -> Result<QuotationService> {
    if config.rates().file.is_none() {
        return Err(FreightError::config(
            "No rate book configured; pass --rates or set FREIGHT_RATES_FILE",
        )
        .into());
    }
    QuotationService::from_config(config)
        .await
        .context("Failed to load rate book")
}

async fn load_shipment(path: &Path) -> Result<ShipmentRequest> {
    let request = ShipmentRequest::load_from_file(path)
        .await
        .with_context(|| format!("Failed to read shipment {}", path.display()))?;

    request
        .validate()
        .map_err(FreightError::Validation)
        .with_context(|| format!("Invalid shipment {}", path.display()))?;

    debug!("Shipment {} validated", path.display());
    Ok(request)
}
