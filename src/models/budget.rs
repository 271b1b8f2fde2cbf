//! The single spending limit for a month
//!
//! Exactly one budget exists; it applies to whichever month is current.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Monthly spending limit, never negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    amount: Money,
}

impl Budget {
    /// Create a budget, rejecting negative amounts
    pub fn new(amount: Money) -> Option<Self> {
        if amount.is_negative() {
            None
        } else {
            Some(Self { amount })
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}
