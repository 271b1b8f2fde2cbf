//! Transaction factory
//!
//! Validates a candidate transaction and builds it. Checks run in a fixed
//! order so the first problem reported is always the same: date, category,
//! amount format, amount sign.

use chrono::{NaiveDate, Utc};

use super::date::{validate_date, DateParts};
use crate::error::TransactionError;
use crate::models::{Money, Transaction, TransactionType};

/// Input for creating a new transaction, as entered by the user
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: String,
    pub category: String,
    pub kind: TransactionType,
    pub date: DateParts,
    pub note: String,
}

impl CreateTransactionInput {
    pub fn new(
        amount: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionType,
        date: DateParts,
    ) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            kind,
            date,
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Validate `input` against `today` and build the transaction
pub fn build_transaction(
    input: &CreateTransactionInput,
    today: NaiveDate,
) -> Result<Transaction, TransactionError> {
    let date = validate_date(&input.date, today)?;

    let category = input.category.trim();
    if category.is_empty() {
        return Err(TransactionError::MissingCategory);
    }

    let amount = match Money::parse(&input.amount) {
        Ok(amount) => amount,
        Err(e) if e.is_negative_number() => return Err(TransactionError::NonPositiveAmount),
        Err(_) => return Err(TransactionError::InvalidAmountFormat(input.amount.clone())),
    };
    if !amount.is_positive() {
        return Err(TransactionError::NonPositiveAmount);
    }

    Ok(Transaction {
        amount,
        category: category.to_string(),
        date,
        kind: input.kind,
        note: input.note.clone(),
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn input(amount: &str, category: &str) -> CreateTransactionInput {
        CreateTransactionInput::new(
            amount,
            category,
            TransactionType::Expense,
            DateParts::new("2024", "6", "1"),
        )
    }

    #[test]
    fn test_builds_normalized_transaction() {
        let txn = build_transaction(&input("12.5", " Food ").with_note("lunch"), today()).unwrap();
        assert_eq!(txn.amount, Money::from_cents(1250));
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.date_string(), "2024-06-01");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.note, "lunch");
    }

    #[test]
    fn test_smallest_positive_amount() {
        let txn = build_transaction(&input("0.01", "Food"), today()).unwrap();
        assert_eq!(txn.amount.cents(), 1);
    }

    #[test]
    fn test_non_positive_amounts() {
        for amount in ["0", "0.00", "-5", "-0.001"] {
            assert!(
                matches!(
                    build_transaction(&input(amount, "Food"), today()),
                    Err(TransactionError::NonPositiveAmount)
                ),
                "accepted {amount}"
            );
        }
    }

    #[test]
    fn test_positive_amount_below_a_cent_is_refused_as_format() {
        for amount in ["0.001", "12.349"] {
            let err = build_transaction(&input(amount, "Food"), today()).unwrap_err();
            assert!(
                matches!(err, TransactionError::InvalidAmountFormat(ref s) if s == amount),
                "{amount}: {err:?}"
            );
        }
    }

    #[test]
    fn test_trailing_zeros_past_the_cents_are_exact() {
        let txn = build_transaction(&input("12.340", "Food"), today()).unwrap();
        assert_eq!(txn.amount, Money::from_cents(1234));
    }

    #[test]
    fn test_amount_above_max_is_refused() {
        let err = build_transaction(&input("90000000000000000", "Food"), today()).unwrap_err();
        assert!(matches!(err, TransactionError::InvalidAmountFormat(_)));
    }

    #[test]
    fn test_invalid_amount_format() {
        let err = build_transaction(&input("ten", "Food"), today()).unwrap_err();
        assert!(matches!(err, TransactionError::InvalidAmountFormat(ref s) if s == "ten"));
    }

    #[test]
    fn test_missing_category() {
        for category in ["", "   "] {
            assert!(matches!(
                build_transaction(&input("10", category), today()),
                Err(TransactionError::MissingCategory)
            ));
        }
    }

    #[test]
    fn test_date_is_checked_first() {
        let mut bad = input("-1", "");
        bad.date = DateParts::new("2024", "2", "30");
        let err = build_transaction(&bad, today()).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::InvalidDate(DateError::DayOutOfRange { month: 2, day: 30 })
        ));
        assert!(err.to_string().starts_with("Invalid date:"));
    }

    #[test]
    fn test_category_checked_before_amount() {
        assert!(matches!(
            build_transaction(&input("abc", ""), today()),
            Err(TransactionError::MissingCategory)
        ));
    }

    #[test]
    fn test_future_date_rejected() {
        let mut future = input("10", "Food");
        future.date = DateParts::new("2024", "6", "16");
        assert!(matches!(
            build_transaction(&future, today()),
            Err(TransactionError::InvalidDate(DateError::FutureDate(_)))
        ));
    }

    #[test]
    fn test_empty_note_is_fine() {
        let txn = build_transaction(&input("1", "Other"), today()).unwrap();
        assert!(txn.note.is_empty());
    }
}
