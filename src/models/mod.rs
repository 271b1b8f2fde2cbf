//! Core data models for Pennywise
//!
//! Transactions, the ledger that holds them, the single monthly budget, and
//! the money and month types they are measured in.

pub mod budget;
pub mod category;
pub mod ledger;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::Budget;
pub use category::{default_categories, find_category, DEFAULT_CATEGORIES};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use transaction::{Transaction, TransactionType};
