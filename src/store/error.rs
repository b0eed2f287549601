//! Error types for document store operations.

use bson::error::Error as BsonError;
use thiserror::Error;

/// Represents all possible errors raised by the store gateway.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store was never configured or could not be reached at startup.
    #[error("store not configured or unreachable")]
    Unavailable,
    /// The supplied identifier is not a well-formed ObjectId hex string.
    #[error("malformed document id: {0}")]
    InvalidId(String),
    /// Conversion between entity structs and BSON documents failed.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// An error reported by the underlying MongoDB driver.
    #[error("backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for store gateway operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
