//! Application state shared across handlers.
//!
//! [`AppState`] is built once and injected into the router; there is no
//! process-global registry. Cloning is cheap (an `Arc` bump).

use std::sync::Arc;

use warehouse_core::Validation;

use crate::registry::Registry;

/// Shared application state for the HTTP server.
#[derive(Clone, Default)]
pub struct AppState {
    /// The warehouse registry. Internally synchronized.
    pub registry: Arc<Registry>,
    /// Input checking applied before touching the registry.
    pub validation: Validation,
}

impl AppState {
    /// Creates an empty state with permissive validation.
    pub fn new() -> Self {
        Self::with_validation(Validation::Permissive)
    }

    pub fn with_validation(validation: Validation) -> Self {
        AppState {
            registry: Arc::new(Registry::new()),
            validation,
        }
    }
}
