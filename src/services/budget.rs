//! Budget setter validation

use crate::error::BudgetError;
use crate::models::{Budget, Money};

/// Parse user input into a new budget
pub fn parse_budget(input: &str) -> Result<Budget, BudgetError> {
    let amount = match Money::parse(input) {
        Ok(amount) => amount,
        Err(e) if e.is_negative_number() => return Err(BudgetError::NegativeBudget),
        Err(_) => return Err(BudgetError::InvalidAmountFormat(input.to_string())),
    };
    Budget::new(amount).ok_or(BudgetError::NegativeBudget)
}
