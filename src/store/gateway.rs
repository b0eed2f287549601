//! Document Store Gateway
//!
//! Thin wrapper around `mongodb::Client` exposing the handful of operations
//! the API layer needs: insert, filtered query, count, fetch-by-id, and
//! collection listing. The gateway is constructed once at startup; when the
//! store environment is absent or unparsable it comes up *disconnected* and
//! write paths fail with [`StoreError::Unavailable`] while read paths degrade
//! to empty results.

use bson::{doc, oid::ObjectId, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{ClientOptions, FindOptions},
    Client, Collection,
};

use super::error::{StoreError, StoreResult};

/// Gateway over the configured MongoDB database.
pub struct StoreGateway {
    /// `None` when the store environment was missing or invalid at startup.
    client: Option<Client>,
    database: String,
}

impl StoreGateway {
    /// Builds a gateway from `DATABASE_URL` and `DATABASE_NAME`.
    ///
    /// Absence of either variable, or an unparsable connection string, yields
    /// a disconnected gateway rather than an error so the server can still
    /// answer liveness and diagnostics requests.
    pub async fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").ok();
        let name = std::env::var("DATABASE_NAME").ok();

        let (url, name) = match (url, name) {
            (Some(url), Some(name)) => (url, name),
            _ => {
                tracing::warn!("DATABASE_URL or DATABASE_NAME not set, store disabled");
                return Self::disconnected();
            }
        };

        match ClientOptions::parse(&url).await {
            Ok(options) => match Client::with_options(options) {
                Ok(client) => Self {
                    client: Some(client),
                    database: name,
                },
                Err(err) => {
                    tracing::warn!(error = %err, "store client rejected options, store disabled");
                    Self::disconnected()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "invalid store connection string, store disabled");
                Self::disconnected()
            }
        }
    }

    /// A gateway with no backing store. Every write fails with
    /// [`StoreError::Unavailable`]; queries return empty results.
    pub fn disconnected() -> Self {
        Self {
            client: None,
            database: String::new(),
        }
    }

    /// Whether a store client was established at startup.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    fn collection(&self, name: &str) -> StoreResult<Collection<Document>> {
        self.client
            .as_ref()
            .map(|client| client.database(&self.database).collection(name))
            .ok_or(StoreError::Unavailable)
    }

    /// Inserts one document and returns the generated id as a hex string.
    pub async fn insert_document(&self, collection: &str, document: Document) -> StoreResult<String> {
        let result = self
            .collection(collection)?
            .insert_one(document)
            .await
            .map_err(StoreError::from)?;

        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id.to_hex()),
            other => Err(StoreError::Serialization(format!(
                "unexpected generated id type: {:?}",
                other
            ))),
        }
    }

    /// Returns at most `limit` documents matching `filter`.
    ///
    /// Never fails: a disconnected gateway or a driver error both degrade to
    /// an empty result so list endpoints keep responding.
    pub async fn query_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Vec<Document> {
        let coll = match self.collection(collection) {
            Ok(coll) => coll,
            Err(_) => return Vec::new(),
        };

        let mut options = FindOptions::default();
        options.limit = Some(limit);

        let cursor = match coll.find(filter).with_options(options).await {
            Ok(cursor) => cursor,
            Err(err) => {
                tracing::warn!(collection, error = %err, "query failed, returning empty result");
                return Vec::new();
            }
        };

        match cursor.try_collect().await {
            Ok(documents) => documents,
            Err(err) => {
                tracing::warn!(collection, error = %err, "cursor drain failed, returning empty result");
                Vec::new()
            }
        }
    }

    /// Fetches a single document by its hex-encoded ObjectId.
    ///
    /// `Ok(None)` means the id was well-formed but no document matched;
    /// a malformed id fails with [`StoreError::InvalidId`] before any
    /// network round trip.
    pub async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let coll = self.collection(collection)?;
        let object_id =
            ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;

        coll.find_one(doc! { "_id": object_id })
            .await
            .map_err(StoreError::from)
    }

    /// Counts documents matching `filter`.
    pub async fn count_documents(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        self.collection(collection)?
            .count_documents(filter)
            .await
            .map_err(StoreError::from)
    }

    /// Lists collection names in the configured database (diagnostics only).
    pub async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        let client = self.client.as_ref().ok_or(StoreError::Unavailable)?;

        client
            .database(&self.database)
            .list_collection_names()
            .await
            .map_err(StoreError::from)
    }
}
