//! The stock record entity and its wire payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stock record: the quantity on hand for a given relation/product
///
/// Records are addressed by `id`. The `id` and `relation_id` are assigned
/// at creation and never change; only `quantity` is mutable, through the
/// update operation. Timestamps are managed automatically.
///
/// The wire representation is camelCase (`relationId`, `createdAt`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Human-readable label
    pub name: String,

    /// Units on hand
    pub quantity: u64,

    /// Opaque reference to the external product entity
    pub relation_id: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,

    /// When this record was last updated
    pub updated_at: DateTime<Utc>,
}

impl StockRecord {
    /// Create a new record with a fresh id and current timestamps
    pub fn new(name: String, quantity: u64, relation_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            quantity,
            relation_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the quantity and refresh `updated_at`
    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
        self.updated_at = Utc::now();
    }
}

/// Validated payload for the create operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStock {
    pub name: String,
    pub quantity: u64,
    pub relation_id: String,
}

/// Validated payload for the update operation
///
/// `stock` is the new absolute quantity, not a delta.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStock {
    pub stock: u64,
}
