//! Application State
//!
//! The shared state passed to every route handler. It owns the store gateway,
//! constructed once at process start and injected via axum's `State`
//! extractor, so handlers never reach for a global store handle.

use super::gateway::StoreGateway;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the document store gateway
pub struct AppState {
    /// Gateway to the MongoDB document store. Shared and read-mostly; the
    /// driver handles its own synchronization.
    pub store: StoreGateway,
}

impl AppState {
    /// Creates state with a gateway configured from the process environment.
    pub async fn from_env() -> Self {
        Self {
            store: StoreGateway::from_env().await,
        }
    }

    /// Creates state around an existing gateway (used by tests).
    pub fn with_store(store: StoreGateway) -> Self {
        Self { store }
    }
}
