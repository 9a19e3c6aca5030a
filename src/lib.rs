//! # Restock
//!
//! An inventory stock-tracking REST API in Rust.
//!
//! ## Features
//!
//! - **Stock record lifecycle**: create, read, update, delete records that
//!   tie a quantity to a product/relation identifier
//! - **Declarative validation**: payload schemas (field → kind/required)
//!   interpreted by a generic validator before handlers run
//! - **Per-operation authorization**: an explicit policy table declares the
//!   gate for every operation; no route is gated by accident
//! - **Request observability**: every request is logged on entry (headers,
//!   credentials redacted) and on completion (status, elapsed time)
//! - **Stable pagination**: 1-based pages, bounded page size, deterministic
//!   ordering, empty pages past the end
//! - **Pluggable storage**: the service talks to a `StockStore` trait; an
//!   in-memory reference backend ships with the crate
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restock::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     tracing_subscriber::fmt::init();
//!
//!     ServerBuilder::new()
//!         .with_store(InMemoryStockStore::new())
//!         .with_config(AppConfig::from_yaml_file("restock.yaml")?)
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod stock;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        auth::{
            AuthContext, AuthPolicy, AuthProvider, NoAuthProvider, Operation, OperationPolicies,
            StaticTokenProvider,
        },
        error::{FieldViolation, StockError, StockResult},
        query::{ListQuery, PageParams, PaginatedResponse, PaginationMeta},
        record::{CreateStock, StockRecord, UpdateStock},
        validation::{FieldKind, FieldRule, Schema, Validated, ValidatedPayload},
    };

    // === Service ===
    pub use crate::stock::{AppState, StockService, StockStore};

    // === Storage ===
    pub use crate::storage::InMemoryStockStore;

    // === Config ===
    pub use crate::config::{AppConfig, AuthConfig, PaginationConfig, PolicyConfig, ServerConfig};

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, Query, State},
        http::HeaderMap,
        routing::{delete, get, post, put},
    };
}
