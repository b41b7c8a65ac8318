//! Filter configuration edited by the product listing controls

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use crate::domain::value_objects::{Category, PriceRange};

/// Category restriction. `All` and a concrete selection are mutually
/// exclusive by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(BTreeSet<Category>),
}

impl CategoryFilter {
    pub fn only(categories: impl IntoIterator<Item = Category>) -> Self {
        Self::Only(categories.into_iter().collect())
    }

    /// An empty `Only` set admits nothing.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&category),
        }
    }

    pub fn is_all(&self) -> bool { matches!(self, Self::All) }
}

/// One entry of the category checkbox list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryChoice { All, Category(Category) }

impl CategoryChoice {
    /// Checkbox order: `All` first, then every department.
    pub fn options() -> impl Iterator<Item = CategoryChoice> {
        std::iter::once(CategoryChoice::All).chain(Category::ALL.into_iter().map(CategoryChoice::Category))
    }
}

impl From<Category> for CategoryChoice {
    fn from(c: Category) -> Self { CategoryChoice::Category(c) }
}

/// Sort dropdown selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum SortKey {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Newest,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [SortKey::Featured, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Newest, SortKey::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Newest => "Newest First",
            SortKey::Rating => "Best Rating",
        }
    }

    /// Unknown tokens fall back to `Featured` so a stale selection never
    /// breaks the listing.
    pub fn parse_lenient(s: &str) -> Self {
        SortKey::ALL.into_iter().find(|k| k.as_str() == s.trim()).unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Anything that is not a known token, strings or otherwise, reads as `Featured`.
impl From<serde_json::Value> for SortKey {
    fn from(value: serde_json::Value) -> Self { value.as_str().map(Self::parse_lenient).unwrap_or_default() }
}
impl From<SortKey> for String { fn from(k: SortKey) -> Self { k.as_str().to_string() } }

/// Live state of the listing controls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub search_query: String,
    pub categories: CategoryFilter,
    pub price_range: PriceRange,
    pub show_on_sale: bool,
    pub show_new: bool,
    pub sort_key: SortKey,
}

impl FilterConfig {
    /// Applies a click on the category checkbox list.
    pub fn toggle_category(&mut self, choice: CategoryChoice) {
        let category = match choice {
            CategoryChoice::All => {
                self.categories = CategoryFilter::All;
                return;
            }
            CategoryChoice::Category(c) => c,
        };
        self.categories = match std::mem::take(&mut self.categories) {
            CategoryFilter::All => CategoryFilter::only([category]),
            CategoryFilter::Only(mut set) => {
                if !set.remove(&category) { set.insert(category); }
                if set.is_empty() { CategoryFilter::All } else { CategoryFilter::Only(set) }
            }
        };
    }

    pub fn is_selected(&self, choice: CategoryChoice) -> bool {
        match (choice, &self.categories) {
            (CategoryChoice::All, filter) => filter.is_all(),
            (CategoryChoice::Category(_), CategoryFilter::All) => false,
            (CategoryChoice::Category(c), CategoryFilter::Only(set)) => set.contains(&c),
        }
    }

    pub fn set_price_range(&mut self, a: Decimal, b: Decimal) { self.price_range = PriceRange::new(a, b); }

    /// Resets every control to its default at once.
    pub fn clear(&mut self) { *self = Self::default(); }

    /// True when nothing but the sort order differs from defaults.
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty() && self.categories.is_all() && self.price_range == PriceRange::default()
            && !self.show_on_sale && !self.show_new
    }
}
