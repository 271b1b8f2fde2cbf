//! The books: ledger, budget and everything that changes them
//!
//! `Book` is built once at startup and owns the only ledger and the only
//! budget. Every mutation validates first, applies in memory, then saves
//! through the `LedgerStore`. A failed save is reported to the caller; the
//! in-memory change is kept.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::clock::Clock;
use crate::error::{BudgetError, DateError, PennywiseResult, TransactionError};
use crate::models::{default_categories, Budget, Ledger, Month, Transaction};
use crate::reports::MonthlySummary;
use crate::services::{
    build_transaction, parse_budget, validate_date, CreateTransactionInput, DateParts,
    SearchResults,
};
use crate::storage::LedgerStore;

pub struct Book {
    ledger: Ledger,
    budget: Budget,
    categories: Vec<String>,
    store: Box<dyn LedgerStore>,
    clock: Box<dyn Clock>,
    audit: Option<AuditLogger>,
}

impl Book {
    /// Load the ledger and budget from `store`
    pub fn open(store: Box<dyn LedgerStore>, clock: Box<dyn Clock>) -> PennywiseResult<Self> {
        let (ledger, budget) = store.load()?;
        Ok(Self {
            ledger,
            budget,
            categories: default_categories(),
            store,
            clock,
            audit: None,
        })
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Replace the categories offered to the user
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Check a year/month/day triple against today's date
    pub fn validate_date(&self, parts: &DateParts) -> Result<NaiveDate, DateError> {
        validate_date(parts, self.today())
    }

    /// Validate, append to the ledger and save
    ///
    /// On `TransactionError::NotSaved` the transaction is already the last
    /// entry of the ledger.
    pub fn add_transaction(
        &mut self,
        input: CreateTransactionInput,
    ) -> Result<Transaction, TransactionError> {
        let txn = build_transaction(&input, self.today()).map_err(|e| {
            debug!(error = %e, "rejected transaction");
            e
        })?;

        self.ledger.push(txn.clone());

        if let Err(e) = self.store.save(&self.ledger, &self.budget) {
            warn!(error = %e, "transaction recorded but not saved");
            return Err(TransactionError::NotSaved(e));
        }

        info!(
            date = %txn.date_string(),
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            "recorded transaction"
        );

        self.audit(AuditEntry::transaction_recorded(self.ledger.len(), &txn));

        Ok(txn)
    }

    /// Validate and replace the budget, then save
    pub fn set_budget(&mut self, input: &str) -> Result<(), BudgetError> {
        let budget = parse_budget(input).map_err(|e| {
            debug!(error = %e, "rejected budget");
            e
        })?;

        let before = std::mem::replace(&mut self.budget, budget);

        if let Err(e) = self.store.save(&self.ledger, &self.budget) {
            warn!(error = %e, "budget updated but not saved");
            return Err(BudgetError::NotSaved(e));
        }

        info!(from = %before.amount(), to = %budget.amount(), "budget updated");

        self.audit(AuditEntry::budget_changed(&before, &budget));

        Ok(())
    }

    /// Spend versus budget for the month containing today
    pub fn monthly_summary(&self) -> MonthlySummary {
        self.monthly_summary_for(Month::current(self.clock.as_ref()))
    }

    /// Spend versus budget for any month
    pub fn monthly_summary_for(&self, month: Month) -> MonthlySummary {
        MonthlySummary::generate(&self.ledger, &self.budget, month)
    }

    /// Transactions matching `query`, newest first
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        SearchResults::new(&self.ledger, query)
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}
