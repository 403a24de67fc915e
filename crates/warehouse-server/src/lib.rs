//! HTTP/JSON API over an in-memory registry of capacity-bounded warehouses.
//!
//! Warehouses are created with a capacity and starting balance, then filled,
//! drained, listed, and deleted through a small REST surface. State lives for
//! the lifetime of the process only.

pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod schema;
pub mod state;
