//! Order history entries shown on the account dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::value_objects::Money;
use crate::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    date: NaiveDate,
    total: Money,
    status: OrderStatus,
    items: Vec<LineItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)] pub struct LineItem { pub name: String, pub image: Option<String>, pub quantity: u32, pub price: Money }
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus { #[default] Pending, Processing, Shipped, Delivered, Cancelled }

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Processing and shipped orders are still moving.
    pub fn is_in_transit(&self) -> bool { matches!(self, OrderStatus::Processing | OrderStatus::Shipped) }
}

impl LineItem {
    pub fn line_total(&self) -> Money { self.price.multiply(self.quantity) }
}

impl Order {
    pub fn new(id: impl Into<String>, date: NaiveDate, total: Money, status: OrderStatus, items: Vec<LineItem>) -> Self {
        Self { id: id.into(), date, total, status, items }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn total(&self) -> &Money { &self.total }
    pub fn status(&self) -> OrderStatus { self.status }
    pub fn items(&self) -> &[LineItem] { &self.items }
    pub fn item_count(&self) -> u32 { self.items.iter().map(|i| i.quantity).sum() }

    /// Sum of line totals; the recorded `total` may differ once shipping or
    /// discounts apply.
    pub fn items_subtotal(&self) -> Result<Money> {
        self.items.iter().try_fold(Money::zero(self.total.currency()), |acc, i| Ok(acc.add(&i.line_total())?))
    }
}
