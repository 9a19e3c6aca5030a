//! HTTP handlers for stock operations
//!
//! The endpoint surface maps the five external operations onto
//! [`StockService`] calls. Parameter extraction and pass-through only; the
//! authorization gate and the observability wrapper are attached as
//! middleware by the server builder, and payload validation happens in the
//! [`Validated`] extractor before a handler body runs.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::PaginationConfig;
use crate::core::auth::{AuthProvider, OperationPolicies};
use crate::core::error::{RequestError, StockError};
use crate::core::query::{ListQuery, PageParams, PaginatedResponse};
use crate::core::record::{CreateStock, StockRecord, UpdateStock};
use crate::core::validation::{FieldKind, FieldRule, Schema, Validated, ValidatedPayload};
use crate::stock::service::StockService;

impl ValidatedPayload for CreateStock {
    fn schema() -> Schema {
        Schema::new(vec![
            FieldRule::required("name", FieldKind::Text),
            FieldRule::required("quantity", FieldKind::Count),
            FieldRule::required("relationId", FieldKind::Text),
        ])
    }
}

impl ValidatedPayload for UpdateStock {
    fn schema() -> Schema {
        Schema::new(vec![FieldRule::required("stock", FieldKind::Count)])
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StockService>,
    pub auth: Arc<dyn AuthProvider>,
    pub policies: OperationPolicies,
    pub pagination: PaginationConfig,
}

/// Parse a `{productId}` path segment into a record id
fn parse_record_id(raw: &str) -> Result<Uuid, StockError> {
    raw.parse::<Uuid>().map_err(|_| {
        RequestError::InvalidRecordId {
            value: raw.to_string(),
        }
        .into()
    })
}

/// List one page of stock records
///
/// GET /stock?limit=&page=
pub async fn list_stock(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PaginatedResponse<StockRecord>>, StockError> {
    let params = PageParams::from_query(&query, &state.pagination)?;
    let page = state.service.list(params).await?;
    Ok(Json(page))
}

/// Get a stock record by id
///
/// GET /stock/{productId}
pub async fn get_stock(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<StockRecord>, StockError> {
    let id = parse_record_id(&product_id)?;
    let record = state.service.get(id).await?;
    Ok(Json(record))
}

/// Create a stock record
///
/// POST /stock
pub async fn create_stock(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateStock>,
) -> Result<Response, StockError> {
    let record = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// Replace the quantity of a stock record
///
/// PUT /stock/{productId}
pub async fn update_stock(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Validated(payload): Validated<UpdateStock>,
) -> Result<Json<StockRecord>, StockError> {
    let id = parse_record_id(&product_id)?;
    let record = state.service.update_quantity(id, payload.stock).await?;
    Ok(Json(record))
}

/// Delete a stock record
///
/// DELETE /stock/{productId}
pub async fn delete_stock(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Response, StockError> {
    let id = parse_record_id(&product_id)?;
    state.service.delete(id).await?;
    Ok((StatusCode::NO_CONTENT, ()).into_response())
}
