use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use stockroom_core::WarehouseId;

use crate::app::routes::inventory;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", put(register_warehouse))
        .route("/:id", get(get_warehouse).delete(delete_warehouse))
        .route("/:id/value", get(warehouse_value))
        .route(
            "/:id/inventory",
            put(inventory::add_stock).get(inventory::list_inventory),
        )
        .route(
            "/:id/inventory/:entry_id",
            get(inventory::get_entry).delete(inventory::remove_entry),
        )
}

/// Parse an opaque warehouse-id token; failures surface as 404 downstream.
pub(super) fn parse_warehouse_id(raw: &str) -> Result<WarehouseId, axum::response::Response> {
    raw.parse::<WarehouseId>()
        .map_err(errors::domain_error_to_response)
}

pub async fn register_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RegisterWarehouseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };

    match services.register_warehouse(body.name, body.location, body.capacity) {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id.to_string() })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_warehouse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.get_warehouse(id) {
        Ok(warehouse) => (StatusCode::OK, Json(dto::warehouse_to_json(&warehouse))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_warehouse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.delete_warehouse(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn warehouse_value(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_warehouse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.warehouse_value(id) {
        Ok(value) => (StatusCode::OK, Json(serde_json::json!({ "value": value }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
