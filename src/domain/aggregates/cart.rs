//! Cart Aggregate

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;
use crate::domain::events::{CartEvent, DomainEvent};
use crate::domain::value_objects::Money;
use crate::{CatalogError, Result};

#[derive(Clone, Debug)]
pub struct Cart {
    id: String,
    items: Vec<CartItem>,
    currency: String,
    events: Vec<DomainEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: Money,
    pub original_price: Option<Money>,
    pub color: String,
    pub size: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Money { self.unit_price.multiply(self.quantity) }
}

/// How much of a line is paid up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPlan { #[default] Full, Partial }

impl PaymentPlan {
    /// Fraction of the line total due now.
    pub fn ratio(&self) -> Decimal {
        match self { Self::Full => Decimal::ONE, Self::Partial => Decimal::new(5, 1) }
    }
    pub fn amount_due(&self, line_total: &Money) -> Money { line_total.scale(self.ratio()) }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PurchaseQuote {
    pub product_id: String,
    pub name: String,
    pub plan: PaymentPlan,
    pub line_total: Money,
    pub amount_due: Money,
    pub balance_after: Money,
}

impl Cart {
    pub fn new(currency: &str) -> Self {
        Self { id: Uuid::new_v4().to_string(), items: vec![], currency: currency.to_string(), events: vec![] }
    }

    pub fn with_items(currency: &str, items: Vec<CartItem>) -> Self {
        let mut cart = Self::new(currency);
        cart.items = items;
        cart
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn currency(&self) -> &str { &self.currency }
    pub fn line_count(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn item(&self, product_id: &str) -> Result<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id).ok_or_else(|| CatalogError::ItemNotFound(product_id.to_string()))
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u32 { self.items.iter().map(|i| i.quantity).sum() }

    pub fn total_value(&self) -> Result<Money> {
        self.items.iter().try_fold(Money::zero(&self.currency), |acc, i| Ok(acc.add(&i.line_total())?))
    }

    pub fn add_item(&mut self, item: CartItem) {
        let (product_id, quantity) = (item.product_id.clone(), item.quantity);
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == item.product_id) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
        self.raise_event(DomainEvent::Cart(CartEvent::ItemAdded { product_id, quantity }));
    }

    /// Sets a line's quantity. Zero is ignored; use [`Cart::remove_item`] to drop a line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            debug!(product_id, "ignoring zero quantity update");
            return Ok(());
        }
        let item = self.items.iter_mut().find(|i| i.product_id == product_id)
            .ok_or_else(|| CatalogError::ItemNotFound(product_id.to_string()))?;
        item.quantity = quantity;
        self.raise_event(DomainEvent::Cart(CartEvent::QuantityUpdated { product_id: product_id.to_string(), quantity }));
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &str) -> Result<CartItem> {
        let pos = self.items.iter().position(|i| i.product_id == product_id)
            .ok_or_else(|| CatalogError::ItemNotFound(product_id.to_string()))?;
        let removed = self.items.remove(pos);
        self.raise_event(DomainEvent::Cart(CartEvent::ItemRemoved { product_id: product_id.to_string() }));
        Ok(removed)
    }

    pub fn clear(&mut self) { self.items.clear(); }

    /// Prices one line under `plan` against the shopper's balance.
    pub fn quote_purchase(&self, product_id: &str, plan: PaymentPlan, balance: &Money) -> Result<PurchaseQuote> {
        let item = self.item(product_id)?;
        let line_total = item.line_total();
        let amount_due = plan.amount_due(&line_total);
        if amount_due.amount() > balance.amount() {
            return Err(CatalogError::InsufficientBalance { due: amount_due.amount(), available: balance.amount() });
        }
        let balance_after = balance.subtract(&amount_due)?;
        Ok(PurchaseQuote { product_id: item.product_id.clone(), name: item.name.clone(), plan, line_total, amount_due, balance_after })
    }

    /// Accepts a quote and drops the line from the cart. The balance is not
    /// debited here.
    pub fn confirm_purchase(&mut self, product_id: &str, plan: PaymentPlan, balance: &Money) -> Result<PurchaseQuote> {
        let quote = self.quote_purchase(product_id, plan, balance)?;
        self.remove_item(product_id)?;
        info!(product_id, amount = %quote.amount_due, ?plan, "purchase confirmed");
        self.raise_event(DomainEvent::Cart(CartEvent::PurchaseConfirmed {
            product_id: product_id.to_string(), plan, amount: quote.amount_due.amount(),
        }));
        Ok(quote)
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
