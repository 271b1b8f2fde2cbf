//! CLI command handlers
//!
//! Bridges clap argument parsing with the books. Category membership and
//! default dates are decided here, before anything reaches `Book`.

pub mod budget;
pub mod misc;
pub mod transaction;

pub use budget::{handle_budget_command, handle_summary, BudgetCommands};
pub use misc::{handle_categories, handle_check_date, handle_history};
pub use transaction::{handle_add, handle_search, AddArgs, SearchArgs};
