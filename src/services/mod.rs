//! Validation and query logic for Pennywise
//!
//! Pure functions over user input and the ledger. Nothing here touches
//! storage; `Book` wires these into mutations.

pub mod budget;
pub mod date;
pub mod search;
pub mod transaction;

pub use budget::parse_budget;
pub use date::{days_in_month, is_leap_year, validate_date, DateParts, MAX_YEAR, MIN_YEAR};
pub use search::{transaction_matches, SearchResults};
pub use transaction::{build_transaction, CreateTransactionInput};
