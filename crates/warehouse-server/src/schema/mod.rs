//! API schema types for request/response definitions.
//!
//! Request bodies are read as [`warehouses::JsonFields`] and individual
//! fields are coerced on demand, so there are no request structs beyond the
//! field-name constants.

pub mod warehouses;
