//! Input validation policy.
//!
//! [`Validation::Permissive`] is the default and accepts everything, matching
//! the clamp-only semantics of [`Accumulator`](crate::Accumulator).
//! [`Validation::Strict`] is an explicit opt-in that rejects negative or
//! non-finite input before it reaches the accumulator.

use crate::error::CoreError;

/// How much checking happens before an accumulator is built or mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    #[default]
    Permissive,
    Strict,
}

impl Validation {
    pub fn is_strict(self) -> bool {
        self == Validation::Strict
    }

    /// Checks constructor arguments.
    pub fn check_new(self, capacity: f64, initial_balance: f64) -> Result<(), CoreError> {
        if !self.is_strict() {
            return Ok(());
        }
        finite("capacity", capacity)?;
        finite("initialBalance", initial_balance)?;
        if capacity < 0.0 {
            return Err(CoreError::NegativeCapacity { capacity });
        }
        if initial_balance < 0.0 {
            return Err(CoreError::NegativeBalance {
                balance: initial_balance,
            });
        }
        if initial_balance > capacity {
            return Err(CoreError::BalanceExceedsCapacity {
                balance: initial_balance,
                capacity,
            });
        }
        Ok(())
    }

    /// Checks an add or withdraw amount.
    pub fn check_amount(self, amount: f64) -> Result<(), CoreError> {
        if !self.is_strict() {
            return Ok(());
        }
        finite("amount", amount)?;
        if amount < 0.0 {
            return Err(CoreError::NegativeAmount { amount });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::NonFinite { field, value })
    }
}
