//! HTTP handler modules for the warehouse API.
//!
//! Handlers coerce request fields, apply the configured validation, and
//! delegate to the [`Registry`](crate::registry::Registry). No arithmetic
//! lives here.

pub mod index;
pub mod warehouses;
