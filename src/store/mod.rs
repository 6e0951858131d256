//! Persistence for survey responses.
//!
//! Handlers only see [`ResponseStore`]; the running server uses
//! [`JsonFileStore`], tests and embedders can use [`MemoryStore`].

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::models::SurveyResponse;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Read the full collection. Never fails: an unreadable collection is
    /// logged and reported as empty.
    async fn load(&self) -> Vec<SurveyResponse>;

    /// Replace the full collection.
    async fn save(&self, records: &[SurveyResponse]) -> Result<(), StoreError>;

    /// Add one record to the end of the collection and return the new total.
    /// Concurrent appends must all be kept.
    async fn append(&self, record: SurveyResponse) -> Result<usize, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "I/O error: {err}"),
            StoreError::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err)
    }
}
