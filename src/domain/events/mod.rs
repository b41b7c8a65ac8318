//! Domain events
use crate::domain::aggregates::cart::PaymentPlan;
use rust_decimal::Decimal;

#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Cart(CartEvent),
    Account(AccountEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartEvent {
    ItemAdded { product_id: String, quantity: u32 },
    QuantityUpdated { product_id: String, quantity: u32 },
    ItemRemoved { product_id: String },
    PurchaseConfirmed { product_id: String, plan: PaymentPlan, amount: Decimal },
}

#[derive(Clone, Debug, PartialEq)]
pub enum AccountEvent {
    TopUpRequested { transaction_id: String, reference: String, amount: Decimal },
}
