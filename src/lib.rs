//! Storefront Catalog
//!
//! Presentation-side domain for a clothing storefront.
//!
//! ## Features
//! - Catalog filter/sort engine (search, categories, price bounds, flags)
//! - Shopping cart with full or partial purchase quotes
//! - Account dashboard: balance, order history, top-up requests
//! - Deterministic mock fixtures

use rust_decimal::Decimal;
use thiserror::Error;

pub mod config;
pub mod domain;
pub mod fixtures;

pub use domain::catalog::{apply, CatalogView, CategoryChoice, CategoryFilter, FilterConfig, SortKey};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Insufficient balance: {due} due, {available} available")]
    InsufficientBalance { due: Decimal, available: Decimal },

    #[error(transparent)]
    Money(#[from] domain::value_objects::MoneyError),

    #[error("Invalid top-up request: {0}")]
    InvalidTopUp(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
