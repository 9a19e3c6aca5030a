//! Persistence seam for stock records

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::StorageError;
use crate::core::record::StockRecord;

/// Storage trait for stock records
///
/// Implementations provide keyed durable storage addressed by record id.
/// The service layer is agnostic to the underlying engine; the in-memory
/// implementation in [`crate::storage`] is the reference backend.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Insert a new record
    ///
    /// Fails with [`StorageError::DuplicateKey`] if a record with the same
    /// id already exists.
    async fn insert(&self, record: StockRecord) -> Result<StockRecord, StorageError>;

    /// Get a record by id
    async fn get(&self, id: &Uuid) -> Result<Option<StockRecord>, StorageError>;

    /// List all records
    async fn list(&self) -> Result<Vec<StockRecord>, StorageError>;

    /// Replace an existing record
    ///
    /// Returns `None` if no record with this id exists.
    async fn update(&self, id: &Uuid, record: StockRecord)
    -> Result<Option<StockRecord>, StorageError>;

    /// Delete a record
    ///
    /// Returns whether a record was actually removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, StorageError>;
}
