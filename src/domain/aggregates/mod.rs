//! Aggregates module
pub mod account;
pub mod cart;
pub mod order;
pub mod product;

pub use account::{Account, BalanceTransaction, Profile, TopUpRequest, TransactionKind, TransactionStatus};
pub use cart::{Cart, CartItem, PaymentPlan, PurchaseQuote};
pub use order::{LineItem, Order, OrderStatus};
pub use product::Product;
