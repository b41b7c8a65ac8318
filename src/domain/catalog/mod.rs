//! Product listing: filter controls and the filter/sort engine
pub mod engine;
pub mod filter;

pub use engine::{apply, apply_refs, matches, view, CatalogView};
pub use filter::{CategoryChoice, CategoryFilter, FilterConfig, SortKey};
