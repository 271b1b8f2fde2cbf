//! Reports for Pennywise
//!
//! Aggregated views over the ledger, rebuilt from a full scan on every call.

pub mod monthly;

pub use monthly::{BalanceState, MonthlySummary};
