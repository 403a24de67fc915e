//! The capacity-bounded accumulator.
//!
//! An [`Accumulator`] holds a fixed `capacity` and a running `balance`.
//! Additions are clamped at the capacity, withdrawals at the current balance.
//! Nothing is validated here: negative inputs flow straight into the clamps.
//! Callers that want range checks go through [`Validation`](crate::Validation)
//! first.

use serde::Serialize;

/// A capacity-bounded numeric balance.
///
/// `0 <= balance <= capacity` holds only as long as callers feed it sane
/// input. Construction accepts any pair of numbers as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    capacity: f64,
    balance: f64,
}

/// Serializable view of an accumulator's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub capacity: f64,
    pub balance: f64,
    pub free_capacity: f64,
}

impl Accumulator {
    /// Creates an accumulator with the given capacity and starting balance.
    pub fn new(capacity: f64, initial_balance: f64) -> Self {
        Accumulator {
            capacity,
            balance: initial_balance,
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Remaining room before the capacity is hit.
    pub fn free_capacity(&self) -> f64 {
        self.capacity - self.balance
    }

    /// Adds `amount`, capping the balance at the capacity.
    ///
    /// A negative amount lowers the balance and is not floored at zero.
    pub fn add(&mut self, amount: f64) {
        self.balance = self.capacity.min(self.balance + amount);
    }

    /// Takes up to `amount` out and returns what was actually taken.
    ///
    /// The amount taken is `min(amount, balance)`. A negative amount is
    /// therefore returned as-is and *raises* the balance by its magnitude:
    /// `withdraw(-5.0)` on a balance of 10 returns -5 and leaves 15.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        let taken = amount.min(self.balance);
        self.balance -= taken;
        taken
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            capacity: self.capacity,
            balance: self.balance,
            free_capacity: self.free_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_reports_free_capacity() {
        let acc = Accumulator::new(100.0, 20.0);
        assert_eq!(acc.capacity(), 100.0);
        assert_eq!(acc.balance(), 20.0);
        assert_eq!(acc.free_capacity(), 80.0);
    }

    #[test]
    fn construction_is_not_validated() {
        let acc = Accumulator::new(-3.0, 7.0);
        assert_eq!(acc.capacity(), -3.0);
        assert_eq!(acc.balance(), 7.0);
        assert_eq!(acc.free_capacity(), -10.0);

        let over = Accumulator::new(10.0, 25.0);
        assert_eq!(over.balance(), 25.0);
        assert_eq!(over.free_capacity(), -15.0);
    }

    #[test]
    fn add_caps_at_capacity() {
        let mut acc = Accumulator::new(100.0, 20.0);
        acc.add(90.0);
        assert_eq!(acc.balance(), 100.0);
        assert_eq!(acc.free_capacity(), 0.0);
    }

    #[test]
    fn add_negative_lowers_balance_below_zero() {
        let mut acc = Accumulator::new(10.0, 2.0);
        acc.add(-5.0);
        assert_eq!(acc.balance(), -3.0);
        assert_eq!(acc.free_capacity(), 13.0);
    }

    #[test]
    fn withdraw_takes_at_most_the_balance() {
        let mut acc = Accumulator::new(100.0, 70.0);
        assert_eq!(acc.withdraw(30.0), 30.0);
        assert_eq!(acc.balance(), 40.0);

        assert_eq!(acc.withdraw(500.0), 40.0);
        assert_eq!(acc.balance(), 0.0);

        assert_eq!(acc.withdraw(1.0), 0.0);
        assert_eq!(acc.balance(), 0.0);
    }

    // Negative withdrawals inflate the balance. Kept for parity with the
    // reference behavior; Validation::Strict is the opt-in fix.
    #[test]
    fn withdraw_negative_inflates_balance() {
        let mut acc = Accumulator::new(100.0, 10.0);
        assert_eq!(acc.withdraw(-5.0), -5.0);
        assert_eq!(acc.balance(), 15.0);
    }

    #[test]
    fn withdraw_can_push_balance_past_capacity() {
        let mut acc = Accumulator::new(10.0, 10.0);
        assert_eq!(acc.withdraw(-4.0), -4.0);
        assert_eq!(acc.balance(), 14.0);
        assert_eq!(acc.free_capacity(), -4.0);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let snap = Accumulator::new(50.0, 5.0).snapshot();
        let json = serde_json::to_value(snap).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "capacity": 50.0, "balance": 5.0, "freeCapacity": 45.0 })
        );
    }

    fn capacity_and_balance() -> impl Strategy<Value = (f64, f64)> {
        (0.0f64..1.0e6).prop_flat_map(|cap| (Just(cap), 0.0f64..=cap))
    }

    proptest! {
        #[test]
        fn fresh_free_capacity_is_capacity_minus_balance(
            (cap, bal) in capacity_and_balance(),
        ) {
            let acc = Accumulator::new(cap, bal);
            prop_assert_eq!(acc.free_capacity(), cap - bal);
        }

        #[test]
        fn overflowing_add_pins_balance_at_capacity(
            (cap, bal) in capacity_and_balance(),
            extra in 0.0f64..1.0e6,
            more in 0.0f64..1.0e6,
        ) {
            let mut acc = Accumulator::new(cap, bal);
            acc.add(cap - bal + extra + 1.0);
            prop_assert_eq!(acc.balance(), cap);
            acc.add(more);
            prop_assert_eq!(acc.balance(), cap);
        }

        #[test]
        fn withdraw_within_balance_is_exact(
            (cap, bal) in capacity_and_balance(),
            frac in 0.0f64..=1.0,
        ) {
            let mut acc = Accumulator::new(cap, bal);
            let amount = bal * frac;
            prop_assert_eq!(acc.withdraw(amount), amount);
            prop_assert_eq!(acc.balance(), bal - amount);
        }

        #[test]
        fn withdraw_beyond_balance_empties(
            (cap, bal) in capacity_and_balance(),
            excess in 1.0e-3f64..1.0e6,
        ) {
            let mut acc = Accumulator::new(cap, bal);
            prop_assert_eq!(acc.withdraw(bal + excess), bal);
            prop_assert_eq!(acc.balance(), 0.0);
        }
    }
}
