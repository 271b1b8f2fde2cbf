//! Storage layer for Pennywise
//!
//! The books talk to storage only through `LedgerStore`: one call to load the
//! ledger and budget at startup, one call to save both after every change.

pub mod file_io;
pub mod json;

pub use file_io::{read_json, stage_json, write_json_atomic, StagedWrite};
pub use json::JsonStore;

use crate::error::PennywiseResult;
use crate::models::{Budget, Ledger};

/// Persists the ledger and the budget
pub trait LedgerStore {
    /// Load the saved ledger and budget, or empty defaults on first run
    fn load(&self) -> PennywiseResult<(Ledger, Budget)>;

    /// Durably save both; an error means nothing can be assumed written
    fn save(&self, ledger: &Ledger, budget: &Budget) -> PennywiseResult<()>;
}
