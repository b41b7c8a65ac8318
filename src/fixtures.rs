//! Mock storefront data
//!
//! Stand-ins for a product backend. The catalog is generated from a seeded
//! RNG so the same seed always yields the same listing.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use crate::domain::aggregates::{
    Account, BalanceTransaction, Cart, CartItem, LineItem, Order, OrderStatus, Product, Profile,
    TransactionKind, TransactionStatus,
};
use crate::domain::value_objects::{Category, Money, Rating};

const PALETTES: [[&str; 3]; 3] = [
    ["#000000", "#FFFFFF", "#FF0000"],
    ["#0000FF", "#00FF00", "#FFFF00"],
    ["#800080", "#FFA500", "#FFC0CB"],
];

/// `size` products priced 20.00..=220.00; roughly 30% carry a markdown,
/// 20% are new arrivals and 30% are flagged on sale.
pub fn mock_catalog(size: u32, seed: u64, currency: &str) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=size)
        .map(|i| {
            let price = Money::new(Decimal::new(rng.gen_range(2_000..=22_000), 2), currency);
            let original = rng.gen_bool(0.3).then(|| Money::new(Decimal::new(rng.gen_range(25_000..=35_000), 2), currency));
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let is_new = rng.gen_bool(0.2);
            let is_on_sale = rng.gen_bool(0.3);
            let rating = Rating::new(Decimal::new(rng.gen_range(30..=50), 1));
            let palette = PALETTES[rng.gen_range(0..PALETTES.len())];

            let product = Product::new(format!("product-{}", i), format!("Product {}", i), price, category)
                .with_image(format!("https://picsum.photos/600/600?random={}", i + 99))
                .with_rating(rating)
                .with_colors(palette.iter().map(|c| c.to_string()).collect())
                .new_arrival(is_new)
                .on_sale(is_on_sale);
            match original {
                Some(o) => product.with_original_price(o),
                None => product,
            }
        })
        .collect()
}

pub fn mock_cart(currency: &str) -> Cart {
    let item = |id: &str, name: &str, cents: i64, original: Option<i64>, color: &str, size: &str, quantity| CartItem {
        product_id: id.into(),
        name: name.into(),
        unit_price: Money::new(Decimal::new(cents, 2), currency),
        original_price: original.map(|c| Money::new(Decimal::new(c, 2), currency)),
        color: color.into(),
        size: size.into(),
        quantity,
    };
    Cart::with_items(currency, vec![
        item("1", "Premium Cotton Shirt", 2999, Some(3999), "Black", "M", 2),
        item("2", "Designer Denim Jacket", 8999, Some(12000), "Blue", "L", 1),
        item("3", "Luxury Silk Scarf", 4599, None, "Red", "One Size", 1),
    ])
}

pub fn mock_account(currency: &str) -> Account {
    let money = |cents: i64| Money::new(Decimal::new(cents, 2), currency);
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default();
    let line = |name: &str, quantity, cents| LineItem { name: name.into(), image: None, quantity, price: money(cents) };
    let txn = |id: &str, kind, cents, description: &str, d, status| BalanceTransaction {
        id: id.into(), kind, amount: money(cents), description: description.into(), date: day(d), status,
    };

    let orders = vec![
        Order::new("ORD-001", day(15), money(8997), OrderStatus::Delivered,
            vec![line("Premium Cotton T-Shirt", 2, 2999), line("Classic Polo Shirt", 1, 2999)]),
        Order::new("ORD-002", day(20), money(15999), OrderStatus::Shipped,
            vec![line("Designer Denim Jacket", 1, 15999)]),
        Order::new("ORD-003", day(22), money(4598), OrderStatus::Processing,
            vec![line("Summer Tank Top", 2, 2299)]),
    ];
    let transactions = vec![
        txn("TXN-001", TransactionKind::Add, 50_000, "Balance Added via Bank Transfer", 10, TransactionStatus::Completed),
        txn("TXN-002", TransactionKind::Deduct, 8997, "Order #ORD-001", 15, TransactionStatus::Completed),
        txn("TXN-003", TransactionKind::Add, 100_000, "Balance Added via Credit Card", 18, TransactionStatus::Completed),
        txn("TXN-004", TransactionKind::Deduct, 15999, "Order #ORD-002", 20, TransactionStatus::Completed),
        txn("TXN-005", TransactionKind::Add, 25_000, "Balance Added via PayPal", 25, TransactionStatus::Pending),
    ];
    let profile = Profile {
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        avatar: Some("https://picsum.photos/150/150?random=100".into()),
    };
    Account::new(profile, money(125_000)).with_history(orders, transactions)
}
