//! In-memory record store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use uservault_core::record::{lookup_value, remove_value, set_value, DataMap, Record};
use uservault_core::storage::{Outcome, RecordStore, Result, StoreError};

/// In-memory storage backend for testing.
///
/// Records live in a `HashMap` behind `Arc<RwLock<_>>`; clones share the
/// same storage, so several stores bound to different main keys can act on
/// one logical table. The table always exists, so operations never report
/// `Outcome::TableCreating`. Data is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore {
    main_key: String,
    records: Arc<RwLock<HashMap<String, DataMap>>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store bound to the given main key.
    pub fn new(main_key: impl Into<String>) -> Self {
        Self {
            main_key: main_key.into(),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Rebinds the active main key for subsequent operations.
    pub fn bind_main_key(&mut self, main_key: impl Into<String>) -> &mut Self {
        self.main_key = main_key.into();
        self
    }

    /// Get the bound main key.
    pub fn main_key(&self) -> &str {
        &self.main_key
    }

    fn main_key_not_found(&self) -> StoreError {
        StoreError::MainKeyNotFound {
            main_key: self.main_key.clone(),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn save(&self, data_key: &str, value: Value) -> Result<Outcome<()>> {
        let mut records = self.records.write().await;
        let data = records.entry(self.main_key.clone()).or_default();
        set_value(data, data_key, value);

        Ok(Outcome::Complete(()))
    }

    async fn load(&self, data_key: &str) -> Result<Outcome<Value>> {
        let records = self.records.read().await;
        let data = records
            .get(&self.main_key)
            .ok_or_else(|| self.main_key_not_found())?;
        let value = lookup_value(data, &self.main_key, data_key)?.clone();

        Ok(Outcome::Complete(value))
    }

    async fn load_record(&self) -> Result<Outcome<Record>> {
        let records = self.records.read().await;
        let data = records
            .get(&self.main_key)
            .ok_or_else(|| self.main_key_not_found())?;

        Ok(Outcome::Complete(Record::with_data(
            &self.main_key,
            data.clone(),
        )))
    }

    async fn delete_value(&self, data_key: &str) -> Result<()> {
        let mut records = self.records.write().await;
        let data = records
            .get_mut(&self.main_key)
            .ok_or_else(|| self.main_key_not_found())?;
        remove_value(data, &self.main_key, data_key)?;

        Ok(())
    }

    async fn delete_record(&self) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(&self.main_key);

        Ok(())
    }
}
