//! Storefront Catalog - prints the filtered product listing as JSON

use anyhow::Result;
use storefront_catalog::config::AppConfig;
use storefront_catalog::domain::catalog::view;
use storefront_catalog::fixtures;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let products = fixtures::mock_catalog(config.catalog_size, config.catalog_seed, &config.currency);
    let listing = view(&products, &config.filter);
    tracing::info!(
        total = products.len(),
        shown = listing.count,
        sort = %config.filter.sort_key,
        "catalog ready"
    );
    if listing.count == 0 {
        tracing::warn!("no products match the current filters");
    }

    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
