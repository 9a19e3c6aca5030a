//! In-memory implementation of StockStore for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::core::error::StorageError;
use crate::core::record::StockRecord;
use crate::stock::store::StockStore;

/// In-memory stock store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryStockStore {
    records: Arc<RwLock<HashMap<Uuid, StockRecord>>>,
}

impl InMemoryStockStore {
    /// Create a new in-memory stock store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStockStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_failure(detail: impl std::fmt::Display) -> StorageError {
    StorageError::Backend {
        message: format!("failed to acquire lock: {}", detail),
    }
}

#[async_trait]
impl StockStore for InMemoryStockStore {
    async fn insert(&self, record: StockRecord) -> Result<StockRecord, StorageError> {
        let mut records = self.records.write().map_err(lock_failure)?;

        if records.contains_key(&record.id) {
            return Err(StorageError::DuplicateKey { id: record.id });
        }

        records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<StockRecord>, StorageError> {
        let records = self.records.read().map_err(lock_failure)?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<StockRecord>, StorageError> {
        let records = self.records.read().map_err(lock_failure)?;

        Ok(records.values().cloned().collect())
    }

    async fn update(
        &self,
        id: &Uuid,
        record: StockRecord,
    ) -> Result<Option<StockRecord>, StorageError> {
        let mut records = self.records.write().map_err(lock_failure)?;

        if !records.contains_key(id) {
            return Ok(None);
        }

        records.insert(*id, record.clone());

        Ok(Some(record))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, StorageError> {
        let mut records = self.records.write().map_err(lock_failure)?;

        Ok(records.remove(id).is_some())
    }
}
