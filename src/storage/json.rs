//! JSON file store
//!
//! Keeps the ledger in `transactions.json` and the budget in `budget.json`,
//! both under the data directory.

use std::path::PathBuf;

use tracing::debug;

use super::file_io::{read_json, stage_json};
use super::LedgerStore;
use crate::config::paths::PennywisePaths;
use crate::error::{PennywiseError, PennywiseResult};
use crate::models::{Budget, Ledger};

/// `LedgerStore` backed by two JSON files
#[derive(Debug, Clone)]
pub struct JsonStore {
    transactions_path: PathBuf,
    budget_path: PathBuf,
}

impl JsonStore {
    pub fn new(paths: &PennywisePaths) -> Self {
        Self {
            transactions_path: paths.transactions_file(),
            budget_path: paths.budget_file(),
        }
    }
}

impl LedgerStore for JsonStore {
    fn load(&self) -> PennywiseResult<(Ledger, Budget)> {
        let ledger: Ledger = read_json(&self.transactions_path)?;
        let budget: Budget = read_json(&self.budget_path)?;

        if budget.amount().is_negative() {
            return Err(PennywiseError::Storage(format!(
                "{} holds a negative budget",
                self.budget_path.display()
            )));
        }

        debug!(
            transactions = ledger.len(),
            budget = %budget.amount(),
            "loaded books"
        );
        Ok((ledger, budget))
    }

    fn save(&self, ledger: &Ledger, budget: &Budget) -> PennywiseResult<()> {
        // Both files are fully written before either replaces its target
        let ledger_write = stage_json(&self.transactions_path, ledger)?;
        let budget_write = stage_json(&self.budget_path, budget)?;
        ledger_write.commit()?;
        budget_write.commit()?;
        debug!(transactions = ledger.len(), "saved books");
        Ok(())
    }
}
