//! Stock record business logic
//!
//! The service owns the record lifecycle and the listing semantics. It is
//! pure delegation plus invariants: no HTTP types, no logging middleware,
//! no authorization — those live at the boundary.

use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{RecordError, StockResult, StorageError};
use crate::core::query::{PageParams, PaginatedResponse, PaginationMeta};
use crate::core::record::{CreateStock, StockRecord};
use crate::stock::store::StockStore;

/// CRUD operations over stock records
pub struct StockService {
    store: Arc<dyn StockStore>,
}

impl StockService {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self { store }
    }

    /// List one page of records
    ///
    /// Pages are ordered by creation time (id as tie-breaker) so that
    /// repeated listings are stable. An out-of-range page is an empty
    /// page, not an error.
    pub async fn list(&self, params: PageParams) -> StockResult<PaginatedResponse<StockRecord>> {
        let mut records = self.store.list().await.map_err(log_storage_failure)?;
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = records.len();
        let data: Vec<StockRecord> = records
            .into_iter()
            .skip(params.offset())
            .take(params.limit)
            .collect();

        Ok(PaginatedResponse {
            data,
            pagination: PaginationMeta::new(params.page, params.limit, total),
        })
    }

    /// Get a record by id
    pub async fn get(&self, id: Uuid) -> StockResult<StockRecord> {
        self.store
            .get(&id)
            .await
            .map_err(log_storage_failure)?
            .ok_or_else(|| RecordError::NotFound { id }.into())
    }

    /// Create a record from a validated payload
    ///
    /// The record gets a fresh id; `name`, `quantity`, and `relation_id`
    /// are taken verbatim from the payload.
    pub async fn create(&self, payload: CreateStock) -> StockResult<StockRecord> {
        let record = StockRecord::new(payload.name, payload.quantity, payload.relation_id);

        match self.store.insert(record).await {
            Ok(created) => Ok(created),
            Err(StorageError::DuplicateKey { id }) => Err(RecordError::AlreadyExists { id }.into()),
            Err(err) => Err(log_storage_failure(err)),
        }
    }

    /// Replace the quantity of an existing record
    ///
    /// This is an absolute replacement, not a delta. Concurrent updates to
    /// the same record are last-write-wins.
    pub async fn update_quantity(&self, id: Uuid, quantity: u64) -> StockResult<StockRecord> {
        let mut record = self.get(id).await?;
        record.set_quantity(quantity);

        self.store
            .update(&id, record)
            .await
            .map_err(log_storage_failure)?
            .ok_or_else(|| RecordError::NotFound { id }.into())
    }

    /// Delete a record by id
    pub async fn delete(&self, id: Uuid) -> StockResult<()> {
        let deleted = self.store.delete(&id).await.map_err(log_storage_failure)?;
        if deleted {
            Ok(())
        } else {
            Err(RecordError::NotFound { id }.into())
        }
    }
}

/// Log a persistence failure and pass it upward unchanged in kind
///
/// The client-visible rendering stays generic; the detail belongs here.
fn log_storage_failure(err: StorageError) -> crate::core::error::StockError {
    tracing::error!(error = %err, "storage operation failed");
    err.into()
}
