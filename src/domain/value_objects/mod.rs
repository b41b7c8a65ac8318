//! Value Objects for the storefront

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Money value object
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money { amount: Decimal, currency: String }

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self { Self { amount, currency: currency.to_string() } }
    pub fn usd(amount: Decimal) -> Self { Self::new(amount, "USD") }
    pub fn zero(currency: &str) -> Self { Self::new(Decimal::ZERO, currency) }
    pub fn amount(&self) -> Decimal { self.amount }
    pub fn currency(&self) -> &str { &self.currency }
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency { return Err(MoneyError::CurrencyMismatch); }
        Ok(Money::new(self.amount + other.amount, &self.currency))
    }
    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency { return Err(MoneyError::CurrencyMismatch); }
        Ok(Money::new(self.amount - other.amount, &self.currency))
    }
    pub fn multiply(&self, qty: u32) -> Money { Money::new(self.amount * Decimal::from(qty), &self.currency) }
    pub fn is_negative(&self) -> bool { self.amount < Decimal::ZERO }
    /// Negative amounts become zero in the same currency.
    pub fn non_negative(self) -> Money { if self.is_negative() { Money::zero(&self.currency) } else { self } }

    /// Scales by `ratio` and rounds to cents.
    pub fn scale(&self, ratio: Decimal) -> Money {
        let scaled = (self.amount * ratio).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Money::new(scaled, &self.currency)
    }
}

impl Default for Money { fn default() -> Self { Self::zero("USD") } }

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:.2} {}", self.amount, self.currency) }
}

#[derive(Debug, Clone)] pub enum MoneyError { CurrencyMismatch }
impl std::error::Error for MoneyError {}
impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Currency mismatch") }
}

/// Star rating, clamped into `0..=5`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    pub const ZERO: Rating = Rating(Decimal::ZERO);
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    pub fn new(value: Decimal) -> Self { Self(value.clamp(Decimal::ZERO, Self::MAX)) }
    pub fn value(&self) -> Decimal { self.0 }
}

impl From<Decimal> for Rating { fn from(value: Decimal) -> Self { Self::new(value) } }
impl From<Rating> for Decimal { fn from(r: Rating) -> Self { r.0 } }

/// Inclusive price bounds. Reversed bounds are swapped on construction so
/// `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Decimal; 2]", into = "[Decimal; 2]")]
pub struct PriceRange { min: Decimal, max: Decimal }

impl PriceRange {
    /// Upper end of the storefront price slider.
    pub const SLIDER_MAX: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

    pub fn new(a: Decimal, b: Decimal) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }
    pub fn min(&self) -> Decimal { self.min }
    pub fn max(&self) -> Decimal { self.max }
    pub fn contains(&self, price: Decimal) -> bool { self.min <= price && price <= self.max }
}

impl Default for PriceRange { fn default() -> Self { Self::new(Decimal::ZERO, Self::SLIDER_MAX) } }
impl From<[Decimal; 2]> for PriceRange { fn from([a, b]: [Decimal; 2]) -> Self { Self::new(a, b) } }
impl From<PriceRange> for [Decimal; 2] { fn from(r: PriceRange) -> Self { [r.min, r.max] } }

/// Catalog department.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category { Men, Women, Accessories, Footwear, Outerwear }

impl Category {
    pub const ALL: [Category; 5] = [Category::Men, Category::Women, Category::Accessories, Category::Footwear, Category::Outerwear];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Accessories => "Accessories",
            Category::Footwear => "Footwear",
            Category::Outerwear => "Outerwear",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

impl FromStr for Category {
    type Err = CategoryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Clone)] pub enum CategoryError { Unknown(String) }
impl std::error::Error for CategoryError {}
impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Self::Unknown(s) => write!(f, "Unknown category: {}", s) }
    }
}
