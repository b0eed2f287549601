//! Diagnostics Module
//!
//! Liveness and store-connectivity endpoints. These never fail: every
//! problem is rendered as a descriptive string in a 200 response.

pub mod handlers;

pub use handlers::routes;
