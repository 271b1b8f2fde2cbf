//! Free-text transaction search
//!
//! A query matches when its lowercased text appears in the category, note,
//! amount, date or type label of a transaction. Results come newest first.

use crate::models::{Ledger, Transaction};

/// Check whether `txn` matches an already-lowercased query
pub fn transaction_matches(txn: &Transaction, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    txn.category.to_lowercase().contains(query)
        || txn.note.to_lowercase().contains(query)
        || txn.amount.to_decimal_string().contains(query)
        || txn.date_string().contains(query)
        || txn.kind.label().to_lowercase().contains(query)
}

/// Lazily filtered view of a ledger, most recent transaction first
///
/// Cloning yields an independent cursor, so a search can be replayed.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    inner: std::iter::Rev<std::slice::Iter<'a, Transaction>>,
    query: String,
}

impl<'a> SearchResults<'a> {
    pub fn new(ledger: &'a Ledger, query: &str) -> Self {
        Self {
            inner: ledger.iter_recent_first(),
            query: query.to_lowercase(),
        }
    }

    /// The normalized (lowercased) query
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl<'a> Iterator for SearchResults<'a> {
    type Item = &'a Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        let query = &self.query;
        self.inner.find(|txn| transaction_matches(txn, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::{NaiveDate, Utc};

    fn txn(cents: i64, category: &str, kind: TransactionType, note: &str) -> Transaction {
        Transaction {
            amount: Money::from_cents(cents),
            category: category.into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
            kind,
            note: note.into(),
            created_at: Utc::now(),
        }
    }

    fn ledger() -> Ledger {
        Ledger::from(vec![
            txn(1200, "Food", TransactionType::Expense, "Groceries run"),
            txn(500000, "Salary", TransactionType::Income, ""),
            txn(4550, "Transport", TransactionType::Expense, "train pass"),
        ])
    }

    fn categories<'a>(results: impl Iterator<Item = &'a Transaction>) -> Vec<&'a str> {
        results.map(|t| t.category.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_newest_first() {
        let ledger = ledger();
        assert_eq!(
            categories(SearchResults::new(&ledger, "")),
            vec!["Transport", "Salary", "Food"]
        );
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let ledger = ledger();
        assert_eq!(categories(SearchResults::new(&ledger, "food")), vec!["Food"]);
        assert_eq!(categories(SearchResults::new(&ledger, "FOOD")), vec!["Food"]);
    }

    #[test]
    fn test_matches_note_amount_date_and_type() {
        let ledger = ledger();
        assert_eq!(categories(SearchResults::new(&ledger, "TRAIN")), vec!["Transport"]);
        assert_eq!(categories(SearchResults::new(&ledger, "45.5")), vec!["Transport"]);
        assert_eq!(categories(SearchResults::new(&ledger, "2024-05")).len(), 3);
        assert_eq!(categories(SearchResults::new(&ledger, "income")), vec!["Salary"]);
        assert_eq!(
            categories(SearchResults::new(&ledger, "expense")),
            vec!["Transport", "Food"]
        );
    }

    #[test]
    fn test_no_match() {
        let ledger = ledger();
        assert_eq!(SearchResults::new(&ledger, "yacht").count(), 0);
    }

    #[test]
    fn test_results_are_restartable() {
        let ledger = ledger();
        let results = SearchResults::new(&ledger, "e");
        let first: Vec<_> = results.clone().collect();
        let second: Vec<_> = results.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_is_lowercased_once() {
        let ledger = ledger();
        assert_eq!(SearchResults::new(&ledger, "SaLaRy").query(), "salary");
    }
}
