//! Axum extractor for validated payloads
//!
//! [`Validated<T>`] applies the payload type's declared schema to the
//! request body before handlers run. Schema mismatches reject with a 400
//! carrying the field-level violations and never reach business logic.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::schema::Schema;
use crate::core::error::{StockError, ValidationError};

/// Trait for payloads that carry a validation schema
pub trait ValidatedPayload: DeserializeOwned {
    /// The declarative schema for this payload
    fn schema() -> Schema;
}

/// Axum extractor that validates and coerces a JSON payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_stock(
///     Validated(payload): Validated<CreateStock>,
/// ) -> Result<Json<StockRecord>, StockError> {
///     // payload is already validated and coerced
/// }
/// ```
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatedPayload,
{
    type Rejection = StockError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> =
            Json::from_request(req, state)
                .await
                .map_err(|e| ValidationError::InvalidJson {
                    message: e.to_string(),
                })?;

        let coerced = T::schema()
            .validate(payload)
            .map_err(ValidationError::FieldErrors)?;

        // The schema already coerced every field, so this only fails on a
        // schema/payload-type mismatch, which is a programming error.
        let parsed = serde_json::from_value(coerced)?;

        Ok(Validated(parsed))
    }
}
