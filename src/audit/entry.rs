//! One line of the audit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Budget, Transaction};

/// What happened to the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A transaction was appended to the ledger
    Create,
    /// The budget was replaced
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
        })
    }
}

/// Which part of the books changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Budget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Transaction => "Transaction",
            EntityType::Budget => "Budget",
        })
    }
}

/// A saved change, with the JSON form of the value before and after it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// `#n` for the n-th transaction of the ledger, `budget` for the budget
    pub entity_id: String,

    /// e.g. "2024-06-01 Food"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// `txn` was appended as the `position`-th entry (1-based)
    pub fn transaction_recorded(position: usize, txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: EntityType::Transaction,
            entity_id: format!("#{}", position),
            entity_name: Some(format!("{} {}", txn.date_string(), txn.category)),
            before: None,
            after: serde_json::to_value(txn).ok(),
            diff_summary: None,
        }
    }

    pub fn budget_changed(before: &Budget, after: &Budget) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type: EntityType::Budget,
            entity_id: "budget".to_string(),
            entity_name: None,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary: Some(format!("amount: {} -> {}", before.amount(), after.amount())),
        }
    }

    /// One or two lines for `pennywise history`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;
    use serde_json::json;

    fn lunch() -> Transaction {
        Transaction {
            amount: Money::from_cents(1250),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            kind: TransactionType::Expense,
            note: "lunch".into(),
            created_at: Utc::now(),
        }
    }

    fn budget(cents: i64) -> Budget {
        Budget::new(Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::Transaction.to_string(), "Transaction");
        assert_eq!(EntityType::Budget.to_string(), "Budget");
    }

    #[test]
    fn test_transaction_recorded() {
        let entry = AuditEntry::transaction_recorded(4, &lunch());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Transaction);
        assert_eq!(entry.entity_id, "#4");
        assert_eq!(entry.entity_name.as_deref(), Some("2024-06-01 Food"));
        assert!(entry.before.is_none());

        let after = entry.after.unwrap();
        assert_eq!(after["amount"], json!(1250));
        assert_eq!(after["type"], json!("expense"));
    }

    #[test]
    fn test_budget_changed() {
        let entry = AuditEntry::budget_changed(&budget(0), &budget(50000));

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.entity_id, "budget");
        assert_eq!(entry.before, Some(json!({"amount": 0})));
        assert_eq!(entry.after, Some(json!({"amount": 50000})));
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("amount: $0.00 -> $500.00")
        );
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::transaction_recorded(3, &lunch());
        let text = serde_json::to_string(&entry).unwrap();
        assert!(!text.contains("before"));
        assert!(!text.contains("diff_summary"));

        let back: AuditEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(back.entity_type, EntityType::Transaction);
        assert_eq!(back.entity_id, "#3");
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::budget_changed(&budget(0), &budget(100)).format_human_readable();
        assert!(formatted.contains("UPDATE Budget budget"));
        assert!(formatted.contains("Changes: amount: $0.00 -> $1.00"));

        let formatted = AuditEntry::transaction_recorded(1, &lunch()).format_human_readable();
        assert!(formatted.contains("CREATE Transaction #1 (2024-06-01 Food)"));
    }
}
