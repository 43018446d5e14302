//! Points panel HTTP handlers.
//!
//! ```text
//! POST /api/v1/points/add     {"code":"123"}
//! POST /api/v1/points/remove  {"code":"123"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::PointsReceipt;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Short code exactly as typed by the operator.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PointsRequest {
    #[schema(example = "123")]
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointsResponse {
    /// Counter value now held by the store.
    #[schema(example = 4)]
    pub points: u64,
    #[schema(example = "Dodano punkt. Nowy stan: 4")]
    pub message: String,
    /// The code input should be emptied.
    pub clear_code: bool,
}

impl From<PointsReceipt> for PointsResponse {
    fn from(receipt: PointsReceipt) -> Self {
        Self {
            points: receipt.points.value(),
            message: receipt.message,
            clear_code: receipt.clear_code,
        }
    }
}

/// Add one loyalty point to the profile behind a short code.
#[utoipa::path(
    post,
    path = "/api/v1/points/add",
    request_body = PointsRequest,
    responses(
        (status = 200, description = "Point added", body = PointsResponse),
        (status = 400, description = "Code is not exactly three digits", body = ErrorSchema),
        (status = 404, description = "No profile for the code", body = ErrorSchema),
        (status = 409, description = "Another adjustment is in progress", body = ErrorSchema),
        (status = 503, description = "Store rejected the update", body = ErrorSchema)
    ),
    tags = ["points"],
    operation_id = "addPoint"
)]
#[post("/points/add")]
pub async fn add_point(
    state: web::Data<HttpState>,
    payload: web::Json<PointsRequest>,
) -> ApiResult<web::Json<PointsResponse>> {
    let receipt = state.points.add_point(payload.into_inner().code).await?;
    Ok(web::Json(receipt.into()))
}

/// Remove one loyalty point, stopping at zero.
#[utoipa::path(
    post,
    path = "/api/v1/points/remove",
    request_body = PointsRequest,
    responses(
        (status = 200, description = "Point removed", body = PointsResponse),
        (status = 400, description = "Code is not exactly three digits", body = ErrorSchema),
        (status = 404, description = "No profile for the code", body = ErrorSchema),
        (status = 409, description = "Another adjustment is in progress", body = ErrorSchema),
        (status = 503, description = "Store rejected the update", body = ErrorSchema)
    ),
    tags = ["points"],
    operation_id = "removePoint"
)]
#[post("/points/remove")]
pub async fn remove_point(
    state: web::Data<HttpState>,
    payload: web::Json<PointsRequest>,
) -> ApiResult<web::Json<PointsResponse>> {
    let receipt = state.points.remove_point(payload.into_inner().code).await?;
    Ok(web::Json(receipt.into()))
}
