//! Toy Catalog Domain Module
//!
//! This module contains the toy-catalog side of the application, including:
//! - Domain models (Toy, creation request)
//! - REST API handlers (list/search, create, fetch, seed)
//! - Seed sample data

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used items for convenience
pub use handlers::routes;
pub use models::{CreateToy, Toy};
