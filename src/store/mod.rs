//! Document Store Module
//!
//! This module contains everything that talks to the MongoDB document store:
//! - Gateway over the driver (insert/query/count/find-by-id)
//! - Store error taxonomy
//! - Application state holding the shared gateway

pub mod error;
pub mod gateway;
pub mod state;

// Re-export commonly used types for convenience
pub use error::{StoreError, StoreResult};
pub use gateway::StoreGateway;
pub use state::{AppState, SharedState};
