//! REST API handlers for the toy catalog
//!
//! This module implements the HTTP endpoints for listing, creating, and
//! fetching toys, plus the idempotent sample-data seed.

use super::{helpers::sample_toys, models::*};
use crate::error::ApiError;
use crate::store::{SharedState, StoreError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use bson::{doc, Document};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

/// Collection holding toy documents
const TOY_COLLECTION: &str = "toy";

/// Hard cap on list results
const LIST_LIMIT: i64 = 100;

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/toys", get(list_toys).post(create_toy))
        .route("/api/toys/:toy_id", get(get_toy))
        .route("/api/seed", get(seed_sample_toys))
}

/// Query parameters accepted by the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListToysQuery {
    /// Exact-match category filter
    pub category: Option<String>,

    /// Case-insensitive substring match on the toy name
    pub q: Option<String>,
}

/// Endpoint: GET /api/toys
/// Lists toys with optional category filter and search query. Both filters
/// combine as a logical AND; results are capped at 100 documents. A
/// disconnected or failing store degrades to an empty list.
async fn list_toys(
    State(state): State<SharedState>,
    Query(params): Query<ListToysQuery>,
) -> Json<Vec<Toy>> {
    let mut filter = Document::new();
    if let Some(category) = params.category.filter(|c| !c.is_empty()) {
        filter.insert("category", category);
    }
    if let Some(q) = params.q.filter(|q| !q.is_empty()) {
        filter.insert("name", doc! { "$regex": q, "$options": "i" });
    }

    let documents = state
        .store
        .query_documents(TOY_COLLECTION, filter, LIST_LIMIT)
        .await;

    let toys = documents
        .into_iter()
        .filter_map(|document| match bson::de::deserialize_from_document(document) {
            Ok(toy) => Some(toy),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed toy document");
                None
            }
        })
        .collect();

    Json(toys)
}

/// Endpoint: POST /api/toys
/// Validates the payload against the toy schema and persists it, returning
/// the generated id. Store availability is checked before validation.
async fn create_toy(
    State(state): State<SharedState>,
    Json(payload): Json<CreateToy>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.store.is_connected() {
        return Err(ApiError::StoreUnavailable);
    }

    payload.validate()?;

    let toy = Toy::from(payload);
    let document = bson::ser::serialize_to_document(&toy).map_err(StoreError::from)?;
    let inserted_id = state.store.insert_document(TOY_COLLECTION, document).await?;

    Ok((StatusCode::CREATED, Json(json!({ "_id": inserted_id }))))
}

/// Endpoint: GET /api/toys/{toy_id}
/// Fetches a single toy. 503 when the store is down, 400 for a malformed id,
/// 404 for a well-formed id with no matching document.
async fn get_toy(
    State(state): State<SharedState>,
    Path(toy_id): Path<String>,
) -> Result<Json<Toy>, ApiError> {
    let document = state
        .store
        .find_by_id(TOY_COLLECTION, &toy_id)
        .await?
        .ok_or(ApiError::NotFound("Toy"))?;

    let toy: Toy = bson::de::deserialize_from_document(document).map_err(StoreError::from)?;
    Ok(Json(toy))
}

/// Endpoint: GET /api/seed
/// Seeds the catalog with sample toys if it is empty. Best-effort: individual
/// insert failures are skipped and tallied in the response. Never errors.
async fn seed_sample_toys(State(state): State<SharedState>) -> Json<Value> {
    if !state.store.is_connected() {
        return Json(json!({ "status": "store-unavailable" }));
    }

    let count = match state.store.count_documents(TOY_COLLECTION, doc! {}).await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(error = %err, "seed count failed");
            return Json(json!({ "status": "error", "detail": err.to_string() }));
        }
    };

    if count > 0 {
        return Json(json!({ "status": "already-seeded", "count": count }));
    }

    let mut inserted = 0;
    let mut failed = 0;
    for sample in sample_toys() {
        match state.store.insert_document(TOY_COLLECTION, sample).await {
            Ok(_) => inserted += 1,
            Err(err) => {
                tracing::warn!(error = %err, "sample insert failed, continuing");
                failed += 1;
            }
        }
    }

    Json(json!({ "status": "seeded", "inserted": inserted, "failed": failed }))
}
