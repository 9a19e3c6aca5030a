//! Shared test harness for stock store backend testing
//!
//! Provides record builders and the `stock_store_tests!` conformance
//! macro.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

use restock::prelude::*;

mod stock_store_tests;

/// Build a stock record for testing
pub fn test_record(name: &str, quantity: u64) -> StockRecord {
    StockRecord::new(name.to_string(), quantity, format!("prod-{}", name))
}

/// Build several stock records for testing
pub fn test_records(count: usize) -> Vec<StockRecord> {
    (0..count)
        .map(|i| test_record(&format!("item-{}", i), i as u64))
        .collect()
}
