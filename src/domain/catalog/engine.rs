//! Catalog filter/sort engine
//!
//! A pure pass over the product collection: search, category, price bounds,
//! on-sale and new-arrival flags narrow the set in that order, then a stable
//! sort orders what is left. Inputs are never mutated.

use serde::Serialize;
use tracing::debug;
use crate::domain::aggregates::Product;
use super::filter::{FilterConfig, SortKey};

/// Filtered listing plus the count behind the "N products" label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogView<'a> {
    pub count: usize,
    pub products: Vec<&'a Product>,
}

/// Returns the products `config` admits, ordered by its sort key.
pub fn apply(products: &[Product], config: &FilterConfig) -> Vec<Product> {
    apply_refs(products, config).into_iter().cloned().collect()
}

/// Borrowing variant of [`apply`].
pub fn apply_refs<'a>(products: &'a [Product], config: &FilterConfig) -> Vec<&'a Product> {
    let query = config.search_query.to_lowercase();
    let mut matched: Vec<&Product> = products.iter().filter(|p| admits(p, config, &query)).collect();
    sort(&mut matched, config.sort_key);
    debug!(input = products.len(), output = matched.len(), sort = %config.sort_key, "catalog filtered");
    matched
}

pub fn view<'a>(products: &'a [Product], config: &FilterConfig) -> CatalogView<'a> {
    let products = apply_refs(products, config);
    CatalogView { count: products.len(), products }
}

/// Whether `product` passes every active predicate of `config`.
pub fn matches(product: &Product, config: &FilterConfig) -> bool {
    admits(product, config, &config.search_query.to_lowercase())
}

// Search, category, price, on-sale, new; `query` is already lowercased.
fn admits(product: &Product, config: &FilterConfig, query: &str) -> bool {
    matches_search(product, query)
        && config.categories.admits(product.category())
        && config.price_range.contains(product.price().amount())
        && (!config.show_on_sale || product.is_on_sale())
        && (!config.show_new || product.is_new())
}

fn matches_search(product: &Product, query: &str) -> bool {
    query.is_empty()
        || product.name().to_lowercase().contains(query)
        || product.category().label().to_lowercase().contains(query)
}

fn sort(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::PriceLow => products.sort_by(|a, b| a.price().amount().cmp(&b.price().amount())),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price().amount().cmp(&a.price().amount())),
        SortKey::Newest => products.sort_by_key(|p| !p.is_new()),
        SortKey::Rating => products.sort_by(|a, b| b.rating_or_zero().cmp(&a.rating_or_zero())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::filter::{CategoryChoice, CategoryFilter};
    use crate::domain::value_objects::{Category, Money, PriceRange, Rating};
    use rust_decimal::Decimal;

    fn product(id: &str, price: i64, category: Category) -> Product {
        Product::new(id, format!("Product {id}"), Money::usd(Decimal::new(price, 0)), category)
    }

    fn ids(products: &[Product]) -> Vec<&str> { products.iter().map(|p| p.id()).collect() }

    fn priced(prices: &[i64]) -> Vec<Product> {
        prices.iter().enumerate().map(|(i, &p)| product(&(i + 1).to_string(), p, Category::Men)).collect()
    }

    #[test]
    fn test_default_config_passes_everything_in_order() {
        let products = priced(&[30, 10, 20]);
        assert_eq!(apply(&products, &FilterConfig::default()), products);
    }

    #[test]
    fn test_empty_input() {
        assert!(apply(&[], &FilterConfig::default()).is_empty());
    }

    #[test]
    fn test_inclusive_price_bounds() {
        let products = priced(&[10, 50, 500]);
        let cfg = FilterConfig::default();
        assert_eq!(ids(&apply(&products, &cfg)), ["1", "2", "3"]);

        let mut cfg = FilterConfig::default();
        cfg.set_price_range(Decimal::new(20, 0), Decimal::new(500, 0));
        assert_eq!(ids(&apply(&products, &cfg)), ["2", "3"]);
    }

    #[test]
    fn test_reversed_price_range_is_swapped() {
        let products = priced(&[10, 50, 500]);
        let cfg = FilterConfig { price_range: PriceRange::new(Decimal::new(60, 0), Decimal::new(5, 0)), ..Default::default() };
        assert_eq!(ids(&apply(&products, &cfg)), ["1", "2"]);
    }

    #[test]
    fn test_on_sale_keeps_relative_order() {
        let products: Vec<_> = [true, false, true].iter().enumerate()
            .map(|(i, &sale)| product(&i.to_string(), 10, Category::Women).on_sale(sale))
            .collect();
        let cfg = FilterConfig { show_on_sale: true, ..Default::default() };
        assert_eq!(ids(&apply(&products, &cfg)), ["0", "2"]);
    }

    #[test]
    fn test_new_flag() {
        let products = vec![product("a", 10, Category::Men).new_arrival(true), product("b", 10, Category::Men)];
        let cfg = FilterConfig { show_new: true, ..Default::default() };
        assert_eq!(ids(&apply(&products, &cfg)), ["a"]);
    }

    #[test]
    fn test_sort_by_price() {
        let products = priced(&[30, 10, 20]);
        let low = FilterConfig { sort_key: SortKey::PriceLow, ..Default::default() };
        let prices: Vec<_> = apply(&products, &low).iter().map(|p| p.price().amount()).collect();
        assert_eq!(prices, [Decimal::new(10, 0), Decimal::new(20, 0), Decimal::new(30, 0)]);

        let high = FilterConfig { sort_key: SortKey::PriceHigh, ..Default::default() };
        assert_eq!(ids(&apply(&products, &high)), ["1", "3", "2"]);
    }

    #[test]
    fn test_newest_is_stable() {
        let flags = [false, true, false, true];
        let products: Vec<_> = flags.iter().enumerate()
            .map(|(i, &new)| product(&i.to_string(), 10, Category::Men).new_arrival(new))
            .collect();
        let cfg = FilterConfig { sort_key: SortKey::Newest, ..Default::default() };
        assert_eq!(ids(&apply(&products, &cfg)), ["1", "3", "0", "2"]);
    }

    #[test]
    fn test_rating_sort_treats_missing_as_zero() {
        let products = vec![
            product("unrated", 10, Category::Men),
            product("mid", 10, Category::Men).with_rating(Rating::new(Decimal::new(38, 1))),
            product("top", 10, Category::Men).with_rating(Rating::new(Decimal::new(49, 1))),
            product("zero", 10, Category::Men).with_rating(Rating::ZERO),
        ];
        let cfg = FilterConfig { sort_key: SortKey::Rating, ..Default::default() };
        assert_eq!(ids(&apply(&products, &cfg)), ["top", "mid", "unrated", "zero"]);
    }

    #[test]
    fn test_search_matches_name_or_category_case_insensitively() {
        let products = vec![
            Product::new("1", "Denim Jacket", Money::usd(Decimal::new(90, 0)), Category::Outerwear),
            Product::new("2", "Silk Scarf", Money::usd(Decimal::new(45, 0)), Category::Accessories),
            Product::new("3", "Running Shoe", Money::usd(Decimal::new(80, 0)), Category::Footwear),
        ];
        let by_name = FilterConfig { search_query: "JACKET".into(), ..Default::default() };
        assert_eq!(ids(&apply(&products, &by_name)), ["1"]);
        let by_category = FilterConfig { search_query: "foot".into(), ..Default::default() };
        assert_eq!(ids(&apply(&products, &by_category)), ["3"]);
        let none = FilterConfig { search_query: "hat".into(), ..Default::default() };
        assert!(apply(&products, &none).is_empty());
    }

    #[test]
    fn test_category_toggle_round_trip() {
        let products = vec![
            product("m", 10, Category::Men),
            product("w", 10, Category::Women),
            product("a", 10, Category::Accessories),
        ];
        let mut cfg = FilterConfig::default();
        cfg.toggle_category(Category::Men.into());
        assert_eq!(ids(&apply(&products, &cfg)), ["m"]);
        cfg.toggle_category(CategoryChoice::All);
        assert_eq!(ids(&apply(&products, &cfg)), ["m", "w", "a"]);
        cfg.toggle_category(Category::Men.into());
        assert!(!cfg.is_selected(CategoryChoice::All));
        assert_eq!(ids(&apply(&products, &cfg)), ["m"]);
    }

    #[test]
    fn test_empty_only_set_admits_nothing() {
        let products = priced(&[10]);
        let cfg = FilterConfig { categories: CategoryFilter::Only(Default::default()), ..Default::default() };
        assert!(apply(&products, &cfg).is_empty());
    }

    #[test]
    fn test_view_reports_count_and_leaves_input_untouched() {
        let products = priced(&[30, 10, 20]);
        let before = products.clone();
        let cfg = FilterConfig { sort_key: SortKey::PriceLow, price_range: PriceRange::new(Decimal::new(15, 0), Decimal::new(40, 0)), ..Default::default() };
        let listing = view(&products, &cfg);
        assert_eq!(listing.count, 2);
        assert_eq!(listing.products.iter().map(|p| p.id()).collect::<Vec<_>>(), ["3", "1"]);
        assert_eq!(products, before);
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let products = vec![
            product("1", 10, Category::Men).on_sale(true),
            product("2", 50, Category::Women).new_arrival(true),
            product("3", 500, Category::Footwear).on_sale(true).new_arrival(true),
        ];
        let configs = [
            FilterConfig { search_query: "PRODUCT 2".into(), ..Default::default() },
            FilterConfig { search_query: "wear".into(), ..Default::default() },
            FilterConfig { categories: CategoryFilter::only([Category::Men, Category::Footwear]), ..Default::default() },
            FilterConfig { price_range: PriceRange::new(Decimal::new(50, 0), Decimal::new(500, 0)), ..Default::default() },
            FilterConfig { show_on_sale: true, ..Default::default() },
            FilterConfig { show_new: true, show_on_sale: true, ..Default::default() },
        ];
        for cfg in &configs {
            let admitted: Vec<_> = products.iter().filter(|p| matches(p, cfg)).cloned().collect();
            assert_eq!(apply(&products, cfg), admitted, "{:?}", cfg);
        }
        assert_eq!(ids(&apply(&products, &configs[1])), ["3"]);
        assert_eq!(ids(&apply(&products, &configs[5])), ["3"]);
    }
}
