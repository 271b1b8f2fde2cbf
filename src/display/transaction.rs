//! Transaction display formatting
//!
//! Register views list transactions in the order given; callers pass search
//! results, which are already newest first.

use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };

    format!(
        "{} {:7} {:14} {:>12} {}",
        txn.date_string(),
        txn.kind.label(),
        truncate(&txn.category, 14),
        format!("{}{}", sign, txn.amount.format_with_symbol(currency_symbol)),
        txn.note
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register
pub fn format_transaction_register<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    currency_symbol: &str,
) -> String {
    let rows: Vec<String> = transactions
        .into_iter()
        .map(|txn| format_transaction_row(txn, currency_symbol))
        .collect();

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:14} {:>12} {}\n",
        "Date", "Type", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for row in rows {
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Date:      {}\n", txn.date_string()));
    output.push_str(&format!("Type:      {}\n", txn.kind));
    output.push_str(&format!("Category:  {}\n", txn.category));
    output.push_str(&format!(
        "Amount:    {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));

    if !txn.note.is_empty() {
        output.push_str(&format!("Note:      {}\n", txn.note));
    }

    output
}

/// Pad or shorten a string to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
