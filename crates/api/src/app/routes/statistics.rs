use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::dto;

pub fn router() -> Router {
    Router::new()
        .route("/warehouses/capacity", get(capacity_statistics))
        .route("/products/by/category", get(category_counts))
}

pub async fn capacity_statistics(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let stats = services.capacity_statistics();
    (StatusCode::OK, Json(dto::capacity_stats_to_json(&stats))).into_response()
}

pub async fn category_counts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let counts = services
        .product_counts_by_category()
        .iter()
        .map(dto::category_count_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(counts)).into_response()
}
