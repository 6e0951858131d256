use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::SurveyResponse;

use super::{ResponseStore, StoreError};

/// Volatile store for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<SurveyResponse>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<SurveyResponse>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl ResponseStore for MemoryStore {
    async fn load(&self) -> Vec<SurveyResponse> {
        self.records.read().await.clone()
    }

    async fn save(&self, records: &[SurveyResponse]) -> Result<(), StoreError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }

    async fn append(&self, record: SurveyResponse) -> Result<usize, StoreError> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(records.len())
    }
}
