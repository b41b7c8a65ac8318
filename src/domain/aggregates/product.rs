//! Product Aggregate

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize};
use crate::domain::value_objects::{Category, Money, Rating};

/// Number of color swatches a product card shows before the "+N" badge.
pub const VISIBLE_COLORS: usize = 3;

/// A catalog listing. Read-only for the duration of a filtering pass.
/// Prices are never negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    #[serde(deserialize_with = "non_negative_price")]
    price: Money,
    #[serde(default, deserialize_with = "non_negative_original_price")]
    original_price: Option<Money>,
    image: Option<String>,
    category: Category,
    is_new: bool,
    is_on_sale: bool,
    rating: Option<Rating>,
    colors: Vec<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            id: id.into(), name: name.into(), price: price.non_negative(), original_price: None, image: None,
            category, is_new: false, is_on_sale: false, rating: None, colors: vec![],
        }
    }

    pub fn with_original_price(mut self, original: Money) -> Self { self.original_price = Some(original.non_negative()); self }
    pub fn with_image(mut self, url: impl Into<String>) -> Self { self.image = Some(url.into()); self }
    pub fn with_rating(mut self, rating: Rating) -> Self { self.rating = Some(rating); self }
    pub fn with_colors(mut self, colors: Vec<String>) -> Self { self.colors = colors; self }
    pub fn new_arrival(mut self, flag: bool) -> Self { self.is_new = flag; self }
    pub fn on_sale(mut self, flag: bool) -> Self { self.is_on_sale = flag; self }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> &Money { &self.price }
    pub fn original_price(&self) -> Option<&Money> { self.original_price.as_ref() }
    pub fn image(&self) -> Option<&str> { self.image.as_deref() }
    pub fn category(&self) -> Category { self.category }
    pub fn is_new(&self) -> bool { self.is_new }
    pub fn is_on_sale(&self) -> bool { self.is_on_sale }
    pub fn rating(&self) -> Option<Rating> { self.rating }
    pub fn colors(&self) -> &[String] { &self.colors }

    /// Rating used for ordering; a missing rating ranks as zero.
    pub fn rating_or_zero(&self) -> Rating { self.rating.unwrap_or(Rating::ZERO) }

    /// Rating shown on the product card; unrated products display 4.5 stars.
    pub fn display_rating(&self) -> Rating { self.rating.unwrap_or_else(|| Rating::new(Decimal::new(45, 1))) }

    /// Whole-percent discount badge. Only present when the original price is
    /// strictly above the current price.
    pub fn discount_percentage(&self) -> Option<u32> {
        let original = self.original_price.as_ref()?.amount();
        let price = self.price.amount();
        if original <= Decimal::ZERO || original <= price { return None; }
        ((original - price).checked_div(original)? * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    pub fn visible_colors(&self) -> &[String] { &self.colors[..self.colors.len().min(VISIBLE_COLORS)] }
    pub fn hidden_color_count(&self) -> usize { self.colors.len().saturating_sub(VISIBLE_COLORS) }
}

fn non_negative_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let price = Money::deserialize(deserializer)?;
    if price.is_negative() {
        return Err(de::Error::custom(format!("negative price: {}", price)));
    }
    Ok(price)
}

fn non_negative_original_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Money>, D::Error> {
    match Option::<Money>::deserialize(deserializer)? {
        Some(price) if price.is_negative() => Err(de::Error::custom(format!("negative original price: {}", price))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt(price: i64) -> Product {
        Product::new("P1", "Premium Cotton Shirt", Money::usd(Decimal::new(price, 2)), Category::Men)
    }

    #[test]
    fn test_product_create() {
        let p = shirt(2999);
        assert_eq!(p.name(), "Premium Cotton Shirt");
        assert!(!p.is_new() && !p.is_on_sale());
        assert_eq!(p.rating_or_zero(), Rating::ZERO);
        assert_eq!(p.display_rating().value(), Decimal::new(45, 1));
    }

    #[test]
    fn test_discount_percentage() {
        let p = shirt(2999).with_original_price(Money::usd(Decimal::new(3999, 2)));
        // 10.00 / 39.99 = 25.006%
        assert_eq!(p.discount_percentage(), Some(25));
        let p = shirt(8999).with_original_price(Money::usd(Decimal::new(12000, 2)));
        assert_eq!(p.discount_percentage(), Some(25));
        let p = shirt(5000).with_original_price(Money::usd(Decimal::new(10000, 2)));
        assert_eq!(p.discount_percentage(), Some(50));
    }

    #[test]
    fn test_no_discount_when_original_not_higher() {
        assert_eq!(shirt(2999).discount_percentage(), None);
        let p = shirt(2999).with_original_price(Money::usd(Decimal::new(2999, 2)));
        assert_eq!(p.discount_percentage(), None);
        let p = shirt(2999).with_original_price(Money::usd(Decimal::new(1000, 2)));
        assert_eq!(p.discount_percentage(), None);
    }

    #[test]
    fn test_zero_original_price_has_no_discount() {
        let p = shirt(0).with_original_price(Money::usd(Decimal::ZERO));
        assert_eq!(p.discount_percentage(), None);
        let p = Product::new("P2", "Clearance Tee", Money::usd(Decimal::new(-100, 2)), Category::Men)
            .with_original_price(Money::usd(Decimal::ZERO));
        assert_eq!(p.price().amount(), Decimal::ZERO);
        assert_eq!(p.discount_percentage(), None);
    }

    #[test]
    fn test_negative_prices_clamped_on_construction() {
        let p = shirt(-2500).with_original_price(Money::usd(Decimal::new(-10, 0)));
        assert_eq!(p.price(), &Money::usd(Decimal::ZERO));
        assert_eq!(p.original_price(), Some(&Money::usd(Decimal::ZERO)));
    }

    #[test]
    fn test_deserialize_rejects_negative_prices() {
        let json = |price: &str, original: &str| format!(
            r#"{{"id":"P1","name":"Tee","price":{{"amount":"{price}","currency":"USD"}},"original_price":{original},"image":null,"category":"Men","is_new":false,"is_on_sale":false,"rating":null,"colors":[]}}"#
        );
        let zero_original = r#"{"amount":"0","currency":"USD"}"#;
        assert!(serde_json::from_str::<Product>(&json("-1", zero_original)).is_err());
        assert!(serde_json::from_str::<Product>(&json("-25", "null")).is_err());
        assert!(serde_json::from_str::<Product>(&json("10", r#"{"amount":"-5","currency":"USD"}"#)).is_err());

        let p: Product = serde_json::from_str(&json("0", zero_original)).unwrap();
        assert_eq!(p.discount_percentage(), None);
        let p: Product = serde_json::from_str(&json("19.99", "null")).unwrap();
        assert_eq!(p.price().amount(), Decimal::new(1999, 2));
        assert_eq!(p.original_price(), None);
    }

    #[test]
    fn test_color_overflow() {
        let colors = ["#000000", "#FFFFFF", "#FF0000", "#0000FF", "#00FF00"].map(String::from).to_vec();
        let p = shirt(1000).with_colors(colors);
        assert_eq!(p.visible_colors().len(), 3);
        assert_eq!(p.hidden_color_count(), 2);
        assert_eq!(shirt(1000).hidden_color_count(), 0);
    }
}
