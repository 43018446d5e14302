//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No matching resource, e.g. no profile for a short code.
    #[schema(rename = "not_found")]
    NotFound,
    /// Another point adjustment is still in flight.
    #[schema(rename = "conflict")]
    Conflict,
    /// The hosted store failed; the message is the store's own.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message shown to the operator.
    #[schema(example = "Nie znaleziono profilu")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c1a52-7b8e-4f0e-9a53-0c7f1d1d2e3f")]
    trace_id: Option<String>,
    /// Supplementary details, e.g. `{"field": "title"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Category`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Category)]
pub enum CategorySchema {
    #[schema(rename = "MATCHA")]
    Matcha,
    #[schema(rename = "NAPOJE")]
    Napoje,
    #[schema(rename = "JEDZENIE")]
    Jedzenie,
}
