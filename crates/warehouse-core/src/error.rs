//! Core error types for warehouse-core.
//!
//! Only produced when [`Validation::Strict`](crate::Validation::Strict) is
//! opted into. The default permissive mode never fails.

use thiserror::Error;

/// Validation errors for accumulator construction and mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Capacity below zero.
    #[error("capacity must not be negative (got {capacity})")]
    NegativeCapacity { capacity: f64 },

    /// Initial balance below zero.
    #[error("initial balance must not be negative (got {balance})")]
    NegativeBalance { balance: f64 },

    /// Initial balance larger than the capacity it must fit in.
    #[error("initial balance {balance} exceeds capacity {capacity}")]
    BalanceExceedsCapacity { balance: f64, capacity: f64 },

    /// Add or withdraw amount below zero.
    #[error("amount must not be negative (got {amount})")]
    NegativeAmount { amount: f64 },

    /// NaN or infinite input.
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
}
