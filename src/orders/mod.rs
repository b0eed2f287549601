//! Order-Taking Domain Module
//!
//! This module contains the order side of the application:
//! - Domain models (Order, embedded OrderItem, creation request)
//! - REST API handler for order submission

pub mod handlers;
pub mod models;

// Re-export commonly used items for convenience
pub use handlers::routes;
pub use models::{CreateOrder, Order, OrderItem};
