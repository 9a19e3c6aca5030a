//! Typed error handling for the restock API
//!
//! This module provides the error type hierarchy used across the crate so
//! that callers can handle failures specifically rather than dealing with
//! generic `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: malformed or mistyped request payloads
//! - [`AuthError`]: missing or invalid credentials
//! - [`RecordError`]: stock record lifecycle failures (not found, conflict)
//! - [`StorageError`]: persistence backend failures
//! - [`RequestError`]: malformed request parameters
//! - [`ConfigError`]: configuration loading failures
//!
//! Validation errors expose field-level detail to the client; auth and
//! storage errors render a generic message and keep their detail in the
//! logs only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the restock API
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug)]
pub enum StockError {
    /// Request payload validation errors
    Validation(ValidationError),

    /// Authorization errors
    Auth(AuthError),

    /// Stock record lifecycle errors (CRUD operations)
    Record(RecordError),

    /// Persistence backend errors
    Storage(StorageError),

    /// Malformed request parameters
    Request(RequestError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockError::Validation(e) => write!(f, "{}", e),
            StockError::Auth(e) => write!(f, "{}", e),
            StockError::Record(e) => write!(f, "{}", e),
            StockError::Storage(e) => write!(f, "{}", e),
            StockError::Request(e) => write!(f, "{}", e),
            StockError::Config(e) => write!(f, "{}", e),
            StockError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for StockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StockError::Validation(e) => Some(e),
            StockError::Auth(e) => Some(e),
            StockError::Record(e) => Some(e),
            StockError::Storage(e) => Some(e),
            StockError::Request(e) => Some(e),
            StockError::Config(e) => Some(e),
            StockError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StockError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StockError::Validation(_) => StatusCode::BAD_REQUEST,
            StockError::Auth(_) => StatusCode::UNAUTHORIZED,
            StockError::Record(e) => e.status_code(),
            StockError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StockError::Request(_) => StatusCode::BAD_REQUEST,
            StockError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StockError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StockError::Validation(_) => "VALIDATION_ERROR",
            StockError::Auth(_) => "UNAUTHORIZED",
            StockError::Record(e) => e.error_code(),
            StockError::Storage(_) => "STORAGE_ERROR",
            StockError::Request(e) => e.error_code(),
            StockError::Config(_) => "CONFIG_ERROR",
            StockError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    ///
    /// Auth and storage errors render a generic message: their detail is
    /// for the logs, not the client.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
            details: self.details(),
        }
    }

    /// The client-visible message for this error
    fn public_message(&self) -> String {
        match self {
            StockError::Auth(_) => "unauthorized".to_string(),
            StockError::Storage(_) => "storage backend error".to_string(),
            StockError::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }

    /// Get additional client-visible details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            StockError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            StockError::Record(RecordError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            StockError::Record(RecordError::AlreadyExists { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for StockError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation violation
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors related to request payload validation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more field-level violations
    FieldErrors(Vec<FieldViolation>),

    /// The request body was not valid JSON
    InvalidJson { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "validation failed: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "invalid JSON body: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for StockError {
    fn from(err: ValidationError) -> Self {
        StockError::Validation(err)
    }
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Errors related to authorization
///
/// The variants are distinguished for logging; the client always receives
/// the same generic 401 rendering.
#[derive(Debug)]
pub enum AuthError {
    /// No credential was presented on a gated operation
    MissingCredential,

    /// A credential was presented but did not verify
    InvalidCredential,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredential => write!(f, "missing credential"),
            AuthError::InvalidCredential => write!(f, "invalid credential"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<AuthError> for StockError {
    fn from(err: AuthError) -> Self {
        StockError::Auth(err)
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to stock record operations
#[derive(Debug)]
pub enum RecordError {
    /// No record exists with the given id
    NotFound { id: Uuid },

    /// A record with the given id already exists (conflict)
    AlreadyExists { id: Uuid },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotFound { id } => {
                write!(f, "stock record with id '{}' not found", id)
            }
            RecordError::AlreadyExists { id } => {
                write!(f, "stock record with id '{}' already exists", id)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl RecordError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
            RecordError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
        }
    }
}

impl From<RecordError> for StockError {
    fn from(err: RecordError) -> Self {
        StockError::Record(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors surfaced by the persistence collaborator
#[derive(Debug)]
pub enum StorageError {
    /// A record with this key already exists in the store
    DuplicateKey { id: Uuid },

    /// Backend not reachable
    Unavailable { backend: String },

    /// Backend rejected or failed the operation
    Backend { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DuplicateKey { id } => {
                write!(f, "duplicate key '{}'", id)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "storage backend '{}' is unavailable", backend)
            }
            StorageError::Backend { message } => {
                write!(f, "storage backend error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for StockError {
    fn from(err: StorageError) -> Self {
        StockError::Storage(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to malformed request parameters
#[derive(Debug)]
pub enum RequestError {
    /// The path id was not a valid record identifier
    InvalidRecordId { value: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidRecordId { value } => {
                write!(f, "invalid record id: '{}'", value)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidRecordId { .. } => "INVALID_RECORD_ID",
        }
    }
}

impl From<RequestError> for StockError {
    fn from(err: RequestError) -> Self {
        StockError::Request(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    Parse {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    Io { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { file, message } => {
                if let Some(file) = file {
                    write!(f, "failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "failed to parse config: {}", message)
                }
            }
            ConfigError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for StockError {
    fn from(err: ConfigError) -> Self {
        StockError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for StockError {
    fn from(err: serde_json::Error) -> Self {
        StockError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for StockError {
    fn from(err: std::io::Error) -> Self {
        StockError::Config(ConfigError::Io {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for StockError {
    fn from(err: serde_yaml::Error) -> Self {
        StockError::Config(ConfigError::Parse {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for StockError {
    fn from(err: anyhow::Error) -> Self {
        StockError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for restock operations
pub type StockResult<T> = Result<T, StockError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display() {
        let err = RecordError::NotFound { id: Uuid::nil() };
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains(&Uuid::nil().to_string()));
    }

    #[test]
    fn test_record_error_status_codes() {
        let err = RecordError::NotFound { id: Uuid::nil() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = RecordError::AlreadyExists { id: Uuid::nil() };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldViolation::new("name", "is required"),
            FieldViolation::new("quantity", "must be a non-negative integer"),
        ]);
        let display = err.to_string();
        assert!(display.contains("name"));
        assert!(display.contains("quantity"));
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: StockError =
            ValidationError::FieldErrors(vec![FieldViolation::new("stock", "is required")]).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_validation_response_carries_field_details() {
        let err: StockError =
            ValidationError::FieldErrors(vec![FieldViolation::new("name", "is required")]).into();
        let response = err.to_response();
        let details = response.details.expect("validation errors carry details");
        assert_eq!(details["fields"][0]["field"], "name");
        assert_eq!(details["fields"][0]["message"], "is required");
    }

    #[test]
    fn test_auth_error_renders_generically() {
        for err in [AuthError::MissingCredential, AuthError::InvalidCredential] {
            let err: StockError = err.into();
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
            let response = err.to_response();
            assert_eq!(response.code, "UNAUTHORIZED");
            assert_eq!(response.message, "unauthorized");
            assert!(response.details.is_none());
        }
    }

    #[test]
    fn test_storage_error_renders_generically() {
        let err: StockError = StorageError::Backend {
            message: "connection refused on 10.0.0.3:5432".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.to_response();
        assert_eq!(response.code, "STORAGE_ERROR");
        assert!(!response.message.contains("10.0.0.3"));
        assert!(response.details.is_none());
    }

    #[test]
    fn test_storage_error_display_keeps_detail_for_logs() {
        let err = StorageError::Unavailable {
            backend: "in-memory".to_string(),
        };
        assert!(err.to_string().contains("in-memory"));
    }

    #[test]
    fn test_not_found_response_details() {
        let id = Uuid::new_v4();
        let err: StockError = RecordError::NotFound { id }.into();
        let response = err.to_response();
        assert_eq!(response.code, "RECORD_NOT_FOUND");
        assert_eq!(
            response.details.expect("not-found carries the id")["id"],
            id.to_string()
        );
    }

    #[test]
    fn test_request_error_invalid_record_id() {
        let err: StockError = RequestError::InvalidRecordId {
            value: "not-a-uuid".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_RECORD_ID");
        assert!(err.to_string().contains("not-a-uuid"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: StockError = json_err.into();
        assert!(matches!(
            err,
            StockError::Validation(ValidationError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            file: Some("restock.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("restock.yaml"));
    }
}
