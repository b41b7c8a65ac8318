//! Account Aggregate: balance, order history and top-up requests

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;
use validator::Validate;
use crate::domain::aggregates::order::{Order, OrderStatus};
use crate::domain::events::{AccountEvent, DomainEvent};
use crate::domain::value_objects::Money;
use crate::{CatalogError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile { pub name: String, pub email: String, pub phone: String, pub avatar: Option<String> }

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind { Add, Deduct }

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus { Completed, Pending }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
    pub status: TransactionStatus,
}

impl BalanceTransaction {
    /// Amount with its sign applied: credits positive, debits negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind { TransactionKind::Add => self.amount.amount(), TransactionKind::Deduct => -self.amount.amount() }
    }
}

/// Manual balance top-up form. Amount, transaction reference and phone
/// number are required.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct TopUpRequest {
    #[validate(length(min = 1, message = "amount is required"))]
    pub amount: String,
    #[validate(length(min = 1, message = "transaction id is required"))]
    pub transaction_id: String,
    #[validate(length(min = 1, message = "phone number is required"))]
    pub phone_number: String,
    pub transfer_time: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Account {
    profile: Profile,
    balance: Money,
    orders: Vec<Order>,
    transactions: Vec<BalanceTransaction>,
    events: Vec<DomainEvent>,
}

impl Account {
    pub fn new(profile: Profile, balance: Money) -> Self {
        Self { profile, balance, orders: vec![], transactions: vec![], events: vec![] }
    }

    pub fn with_history(mut self, orders: Vec<Order>, transactions: Vec<BalanceTransaction>) -> Self {
        self.orders = orders;
        self.transactions = transactions;
        self
    }

    pub fn profile(&self) -> &Profile { &self.profile }
    pub fn balance(&self) -> &Money { &self.balance }
    pub fn orders(&self) -> &[Order] { &self.orders }
    pub fn transactions(&self) -> &[BalanceTransaction] { &self.transactions }

    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status() == status).collect()
    }

    pub fn pending_transactions(&self) -> impl Iterator<Item = &BalanceTransaction> {
        self.transactions.iter().filter(|t| t.status == TransactionStatus::Pending)
    }

    /// Records a top-up for verification. The balance is unchanged until the
    /// transfer is approved elsewhere.
    pub fn submit_top_up(&mut self, request: &TopUpRequest) -> Result<&BalanceTransaction> {
        request.validate().map_err(|e| CatalogError::InvalidTopUp(e.to_string()))?;
        let amount = Decimal::from_str(request.amount.trim())
            .map_err(|_| CatalogError::InvalidTopUp(format!("amount is not a number: {}", request.amount)))?;
        if amount <= Decimal::ZERO {
            return Err(CatalogError::InvalidTopUp("amount must be positive".into()));
        }

        let id = format!("TXN-{}", Uuid::new_v4().simple());
        let txn = BalanceTransaction {
            id: id.clone(),
            kind: TransactionKind::Add,
            amount: Money::new(amount, self.balance.currency()),
            description: format!("Balance top-up, transfer {}", request.transaction_id),
            date: Utc::now().date_naive(),
            status: TransactionStatus::Pending,
        };
        info!(transaction_id = %id, %amount, "top-up submitted for verification");
        self.events.push(DomainEvent::Account(AccountEvent::TopUpRequested {
            transaction_id: id, reference: request.transaction_id.clone(), amount,
        }));
        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
}
