//! Monthly Summary Report
//!
//! Totals a month's expense and income across the whole ledger and compares
//! the expense against the budget. Income never offsets the budget.

use crate::models::{Budget, Ledger, Money, Month};

/// Whether the month is within budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceState {
    /// Budget left to spend
    Surplus(Money),
    /// Amount spent beyond the budget (positive)
    Deficit(Money),
}

/// Spend versus budget for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub month: Month,
    pub budget: Money,
    pub expense: Money,
    pub income: Money,
    /// Budget minus expense; negative when overspent
    pub balance: Money,
}

impl MonthlySummary {
    /// Scan the full ledger and total the transactions dated in `month`
    pub fn generate(ledger: &Ledger, budget: &Budget, month: Month) -> Self {
        let mut expense = Money::zero();
        let mut income = Money::zero();

        for txn in ledger.iter().filter(|t| month.contains(t)) {
            if txn.is_expense() {
                expense += txn.amount;
            } else {
                income += txn.amount;
            }
        }

        Self {
            month,
            budget: budget.amount(),
            expense,
            income,
            balance: budget.amount() - expense,
        }
    }

    pub fn is_deficit(&self) -> bool {
        self.balance.is_negative()
    }

    /// How far spending went past the budget, zero when within budget
    pub fn overspend(&self) -> Money {
        if self.is_deficit() {
            self.balance.abs()
        } else {
            Money::zero()
        }
    }

    pub fn state(&self) -> BalanceState {
        if self.is_deficit() {
            BalanceState::Deficit(self.balance.abs())
        } else {
            BalanceState::Surplus(self.balance)
        }
    }

    /// `(expense, income, balance, is_deficit)`
    pub fn as_tuple(&self) -> (Money, Money, Money, bool) {
        (self.expense, self.income, self.balance, self.is_deficit())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("Monthly Overview - {}\n", self.month));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<12} {:>14}\n", "Budget:", fmt(self.budget)));
        output.push_str(&format!("{:<12} {:>14}\n", "Expense:", fmt(self.expense)));
        output.push_str(&format!("{:<12} {:>14}\n", "Income:", fmt(self.income)));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        match self.state() {
            BalanceState::Surplus(left) => {
                output.push_str(&format!("{:<12} {:>14}\n", "Balance:", fmt(left)));
            }
            BalanceState::Deficit(over) => {
                output.push_str(&format!("{:<12} {:>14} !\n", "Overspent:", fmt(over)));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};
    use chrono::{NaiveDate, Utc};

    fn txn(cents: i64, kind: TransactionType, y: i32, m: u32, d: u32) -> Transaction {
        Transaction {
            amount: Money::from_cents(cents),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            kind,
            note: String::new(),
            created_at: Utc::now(),
        }
    }

    fn budget(cents: i64) -> Budget {
        Budget::new(Money::from_cents(cents)).unwrap()
    }

    fn june() -> Month {
        Month::new(2024, 6).unwrap()
    }

    #[test]
    fn test_only_current_month_counts() {
        let ledger = Ledger::from(vec![
            txn(10000, TransactionType::Expense, 2024, 6, 3),
            txn(5000, TransactionType::Income, 2024, 6, 10),
            txn(999900, TransactionType::Expense, 2024, 5, 31),
        ]);

        let summary = MonthlySummary::generate(&ledger, &budget(50000), june());
        assert_eq!(
            summary.as_tuple(),
            (
                Money::from_cents(10000),
                Money::from_cents(5000),
                Money::from_cents(40000),
                false
            )
        );
        assert_eq!(summary.state(), BalanceState::Surplus(Money::from_cents(40000)));
        assert!(summary.overspend().is_zero());
    }

    #[test]
    fn test_deficit() {
        let ledger = Ledger::from(vec![txn(10000, TransactionType::Expense, 2024, 6, 1)]);

        let summary = MonthlySummary::generate(&ledger, &budget(5000), june());
        assert_eq!(summary.balance, Money::from_cents(-5000));
        assert!(summary.is_deficit());
        assert_eq!(summary.overspend(), Money::from_cents(5000));
        assert_eq!(summary.state(), BalanceState::Deficit(Money::from_cents(5000)));
    }

    #[test]
    fn test_income_does_not_offset_budget() {
        let ledger = Ledger::from(vec![
            txn(10000, TransactionType::Expense, 2024, 6, 1),
            txn(1000000, TransactionType::Income, 2024, 6, 1),
        ]);

        let summary = MonthlySummary::generate(&ledger, &budget(5000), june());
        assert!(summary.is_deficit());
    }

    #[test]
    fn test_exactly_on_budget_is_not_deficit() {
        let ledger = Ledger::from(vec![txn(5000, TransactionType::Expense, 2024, 6, 1)]);
        let summary = MonthlySummary::generate(&ledger, &budget(5000), june());
        assert!(summary.balance.is_zero());
        assert!(!summary.is_deficit());
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let ledger = Ledger::from(vec![
            txn(i64::MAX, TransactionType::Expense, 2024, 6, 1),
            txn(i64::MAX, TransactionType::Expense, 2024, 6, 2),
        ]);
        let summary = MonthlySummary::generate(&ledger, &budget(100), Month::new(2024, 6).unwrap());
        assert_eq!(summary.expense, Money::from_cents(i64::MAX));
        assert!(summary.is_deficit());
    }

    #[test]
    fn test_empty_ledger() {
        let summary = MonthlySummary::generate(&Ledger::new(), &Budget::default(), june());
        assert_eq!(
            summary.as_tuple(),
            (Money::zero(), Money::zero(), Money::zero(), false)
        );
    }

    #[test]
    fn test_terminal_format() {
        let ledger = Ledger::from(vec![txn(10000, TransactionType::Expense, 2024, 6, 1)]);

        let within = MonthlySummary::generate(&ledger, &budget(50000), june());
        let output = within.format_terminal("$");
        assert!(output.contains("Monthly Overview - 2024-06"));
        assert!(output.contains("Balance:"));
        assert!(output.contains("$400.00"));

        let over = MonthlySummary::generate(&ledger, &budget(5000), june());
        let output = over.format_terminal("$");
        assert!(output.contains("Overspent:"));
        assert!(output.contains("$50.00"));
        assert!(!output.contains("-$"));
    }
}
