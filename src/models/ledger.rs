//! Ordered collection of every recorded transaction
//!
//! Insertion order is preserved: the oldest recorded transaction comes first
//! and the most recent is last.

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction at the end
    pub fn push(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The most recently recorded transaction
    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Transactions in the order they were recorded
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Transactions newest first
    pub fn iter_recent_first(&self) -> std::iter::Rev<std::slice::Iter<'_, Transaction>> {
        self.transactions.iter().rev()
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
