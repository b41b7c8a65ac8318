//! Environment configuration

use validator::Validate;
use crate::domain::catalog::FilterConfig;
use crate::{CatalogError, Result};

const DEFAULT_CATALOG_SIZE: u32 = 50;
const DEFAULT_SEED: u64 = 100;

#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    /// Number of mock products to generate.
    #[validate(range(min = 1, max = 500))]
    pub catalog_size: u32,
    pub catalog_seed: u64,
    #[validate(length(equal = 3))]
    pub currency: String,
    /// Listing controls, from `CATALOG_FILTER` as JSON.
    pub filter: FilterConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` uses the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog_size = match lookup("CATALOG_SIZE") {
            Some(v) => v.trim().parse::<u32>().map_err(|e| CatalogError::Config(format!("CATALOG_SIZE: {}", e)))?,
            None => DEFAULT_CATALOG_SIZE,
        };
        let catalog_seed = match lookup("CATALOG_SEED") {
            Some(v) => v.trim().parse::<u64>().map_err(|e| CatalogError::Config(format!("CATALOG_SEED: {}", e)))?,
            None => DEFAULT_SEED,
        };
        let currency = lookup("CATALOG_CURRENCY").unwrap_or_else(|| "USD".to_string()).trim().to_uppercase();
        let filter = match lookup("CATALOG_FILTER") {
            Some(json) => serde_json::from_str(&json).map_err(|e| CatalogError::Config(format!("CATALOG_FILTER: {}", e)))?,
            None => FilterConfig::default(),
        };

        let config = Self { catalog_size, catalog_seed, currency, filter };
        config.validate().map_err(|e| CatalogError::Config(e.to_string()))?;
        Ok(config)
    }
}
