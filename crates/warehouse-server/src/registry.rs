//! In-memory warehouse registry.
//!
//! [`Registry`] owns every [`Accumulator`] keyed by a generated
//! [`WarehouseId`]. Backed by `DashMap` so handlers can share it without an
//! outer lock; each mutation runs under the entry's shard write guard, so two
//! concurrent withdrawals on the same warehouse never lose an update.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::Serialize;

use warehouse_core::{Accumulator, Snapshot};

/// Warehouse identifier: a stringified, strictly increasing integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WarehouseId(pub String);

impl std::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for WarehouseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Registry of live warehouses.
pub struct Registry {
    entries: DashMap<WarehouseId, Accumulator>,
    /// Last id handed out. Never decremented, so ids are not reused.
    next_id: AtomicU64,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Registry {
            entries: DashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Builds and stores a warehouse, returning its freshly assigned id.
    pub fn create(&self, capacity: f64, initial_balance: f64) -> (WarehouseId, Accumulator) {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let id = WarehouseId(n.to_string());
        let acc = Accumulator::new(capacity, initial_balance);
        self.entries.insert(id.clone(), acc);
        (id, acc)
    }

    /// Returns a copy of the warehouse, if it exists.
    pub fn get(&self, id: &str) -> Option<Accumulator> {
        self.entries.get(id).map(|entry| *entry)
    }

    /// Adds to a warehouse and returns its new state.
    pub fn add(&self, id: &str, amount: f64) -> Option<Accumulator> {
        self.entries.get_mut(id).map(|mut entry| {
            entry.add(amount);
            *entry
        })
    }

    /// Withdraws from a warehouse, returning the amount taken and the new state.
    pub fn withdraw(&self, id: &str, amount: f64) -> Option<(f64, Accumulator)> {
        self.entries.get_mut(id).map(|mut entry| {
            let taken = entry.withdraw(amount);
            (taken, *entry)
        })
    }

    /// Removes a warehouse. Returns `true` if it existed.
    pub fn remove(&self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Snapshots every warehouse, keyed by id.
    pub fn list(&self) -> BTreeMap<String, Snapshot> {
        self.entries
            .iter()
            .map(|entry| (entry.key().0.clone(), entry.value().snapshot()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
