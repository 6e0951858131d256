use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::SurveyResponse;

use super::{ResponseStore, StoreError};

/// Pretty-printed JSON array on disk, rewritten in full on every write.
///
/// Writes go through a single async mutex so the load/push/save of
/// [`ResponseStore::append`] never interleaves with another writer. Each
/// save lands in a sibling `.tmp` file first and is renamed into place, so
/// readers never see a half-written array.
pub struct JsonFileStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty `[]` file if the store
    /// does not exist yet. An existing file is left untouched.
    pub async fn init(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        if !tokio::fs::try_exists(&self.path).await? {
            self.write(&[]).await?;
            tracing::info!("Created empty response store at {}", self.path.display());
        }

        Ok(())
    }

    async fn read(&self) -> Result<Vec<SurveyResponse>, StoreError> {
        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn write(&self, records: &[SurveyResponse]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn load_or_empty(&self) -> Vec<SurveyResponse> {
        match self.read().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error loading {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ResponseStore for JsonFileStore {
    async fn load(&self) -> Vec<SurveyResponse> {
        self.load_or_empty().await
    }

    async fn save(&self, records: &[SurveyResponse]) -> Result<(), StoreError> {
        let _guard = self.writer.lock().await;
        self.write(records).await
    }

    async fn append(&self, record: SurveyResponse) -> Result<usize, StoreError> {
        let _guard = self.writer.lock().await;
        let mut records = self.load_or_empty().await;
        records.push(record);
        self.write(&records).await?;
        Ok(records.len())
    }
}
