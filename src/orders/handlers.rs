//! REST API handler for order submission

use super::models::*;
use crate::error::ApiError;
use crate::store::{SharedState, StoreError};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;
use validator::Validate;

/// Collection holding order documents
const ORDER_COLLECTION: &str = "order";

/// Creates routes for order-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/orders", post(create_order))
}

/// Endpoint: POST /api/orders
/// Persists an order and returns the generated id. Checks, in this order:
/// store availability (503), non-empty items (400), schema validation (422).
/// Item prices and totals are trusted as-is: no stock decrement and no
/// recomputation against current catalog prices.
async fn create_order(
    State(state): State<SharedState>,
    Json(payload): Json<CreateOrder>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.store.is_connected() {
        return Err(ApiError::StoreUnavailable);
    }

    if payload.items.is_empty() {
        return Err(ApiError::BadRequest(
            "Order must contain at least one item".to_string(),
        ));
    }

    payload.validate()?;

    let order = Order::from(payload);
    let document = bson::ser::serialize_to_document(&order).map_err(StoreError::from)?;
    let order_id = state
        .store
        .insert_document(ORDER_COLLECTION, document)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "order_id": order_id }))))
}
