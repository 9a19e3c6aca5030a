//! Macro-generated test suite for `StockStore` contract validation.
//!
//! The `stock_store_tests!` macro generates a test module that validates
//! any `StockStore` implementation against the full contract: CRUD
//! operations, duplicate-key rejection, absent-record behavior, and
//! concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use restock::storage::InMemoryStockStore;
//!
//! stock_store_tests!(InMemoryStockStore::new());
//! ```

/// Generate a full `StockStore` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance
/// implementing `StockStore`. It is re-evaluated for each test to ensure
/// isolation. For the concurrent access test, the returned store must also
/// implement `Clone + 'static` (shared state via Arc pattern).
#[macro_export]
macro_rules! stock_store_tests {
    ($factory:expr) => {
        mod stock_store_contract_tests {
            use super::*;
            use restock::core::error::StorageError;
            use restock::stock::store::StockStore;
            use uuid::Uuid;

            // ==================================================================
            // Insert & Get
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_get() {
                let store = $factory;
                let record = test_record("widget", 5);
                let original_id = record.id;

                let created = store.insert(record).await.unwrap();
                assert_eq!(created.id, original_id);
                assert_eq!(created.name, "widget");
                assert_eq!(created.quantity, 5);
                assert_eq!(created.relation_id, "prod-widget");

                let retrieved = store.get(&original_id).await.unwrap();
                assert!(retrieved.is_some(), "record should exist after insert");
                assert_eq!(retrieved.unwrap(), created);
            }

            #[tokio::test]
            async fn test_insert_duplicate_id_is_rejected() {
                let store = $factory;
                let record = store.insert(test_record("widget", 5)).await.unwrap();

                let result = store.insert(record.clone()).await;
                assert!(matches!(
                    result,
                    Err(StorageError::DuplicateKey { id }) if id == record.id
                ));

                // The stored record is untouched
                let retrieved = store.get(&record.id).await.unwrap().unwrap();
                assert_eq!(retrieved, record);
            }

            #[tokio::test]
            async fn test_get_nonexistent_returns_none() {
                let store = $factory;
                let result = store.get(&Uuid::new_v4()).await.unwrap();
                assert!(result.is_none());
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                let all = store.list().await.unwrap();
                assert!(all.is_empty(), "list on an empty store is empty");
            }

            #[tokio::test]
            async fn test_list_returns_every_record() {
                let store = $factory;
                for record in test_records(5) {
                    store.insert(record).await.unwrap();
                }

                let all = store.list().await.unwrap();
                assert_eq!(all.len(), 5);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let store = $factory;
                let mut record = store.insert(test_record("widget", 5)).await.unwrap();

                record.set_quantity(10);
                let updated = store.update(&record.id, record.clone()).await.unwrap();
                assert_eq!(updated.map(|r| r.quantity), Some(10));

                let retrieved = store.get(&record.id).await.unwrap().unwrap();
                assert_eq!(retrieved.quantity, 10);
                assert_eq!(retrieved.name, "widget");
            }

            #[tokio::test]
            async fn test_update_nonexistent_returns_none() {
                let store = $factory;
                let ghost = test_record("ghost", 0);

                let result = store.update(&ghost.id, ghost.clone()).await.unwrap();
                assert!(result.is_none());

                // Nothing was created as a side effect
                assert!(store.get(&ghost.id).await.unwrap().is_none());
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let record = store.insert(test_record("widget", 5)).await.unwrap();

                assert!(store.delete(&record.id).await.unwrap());
                assert!(store.get(&record.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent_returns_false() {
                let store = $factory;
                assert!(!store.delete(&Uuid::new_v4()).await.unwrap());
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let store = $factory;

                let mut handles = Vec::new();
                for record in test_records(10) {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store.insert(record).await.unwrap();
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                let all = store.list().await.unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}
