use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use stockroom_core::EntryId;

use crate::app::routes::warehouses::parse_warehouse_id;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

fn parse_entry_id(raw: &str) -> Result<EntryId, axum::response::Response> {
    raw.parse::<EntryId>()
        .map_err(errors::domain_error_to_response)
}

pub async fn add_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::AddStockRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection),
    };
    let warehouse_id = match parse_warehouse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.add_stock(warehouse_id, &body.product_id, body.quantity) {
        Ok(entry_id) => (
            StatusCode::OK,
            Json(serde_json::json!({ "id": entry_id.to_string() })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let warehouse_id = match parse_warehouse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.list_inventory(warehouse_id) {
        Ok(entries) => {
            let entries = entries.iter().map(dto::entry_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, entry_id)): Path<(String, String)>,
) -> axum::response::Response {
    let warehouse_id = match parse_warehouse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let entry_id = match parse_entry_id(&entry_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.get_inventory_entry(warehouse_id, entry_id) {
        Ok(entry) => (StatusCode::OK, Json(dto::entry_to_json(&entry))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, entry_id)): Path<(String, String)>,
) -> axum::response::Response {
    let warehouse_id = match parse_warehouse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let entry_id = match parse_entry_id(&entry_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.remove_inventory_entry(warehouse_id, entry_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
