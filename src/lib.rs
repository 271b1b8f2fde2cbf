//! Pennywise - personal bookkeeping
//!
//! Record income and expenses, set a single monthly budget, and compare this
//! month's spending against it.
//!
//! # Architecture
//!
//! - `models`: money, transactions, the ledger, the budget, months
//! - `services`: input validation and search
//! - `reports`: the monthly spend-versus-budget summary
//! - `storage`: the `LedgerStore` persistence trait and its JSON implementation
//! - `book`: the single object that owns the ledger and budget
//! - `audit`: append-only log of accepted changes
//! - `config`: data directory and user settings
//! - `display`, `cli`: terminal presentation
//!
//! # Example
//!
//! ```rust,no_run
//! use pennywise::book::Book;
//! use pennywise::clock::SystemClock;
//! use pennywise::config::PennywisePaths;
//! use pennywise::storage::JsonStore;
//!
//! let paths = PennywisePaths::new()?;
//! let mut book = Book::open(Box::new(JsonStore::new(&paths)), Box::new(SystemClock))?;
//! book.set_budget("500")?;
//! let summary = book.monthly_summary();
//! println!("{}", summary.format_terminal("$"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audit;
pub mod book;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use book::Book;
pub use error::{BudgetError, DateError, PennywiseError, PennywiseResult, TransactionError};
