use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode};

use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Clear every product and warehouse document. Always succeeds.
pub async fn cleanup(Extension(services): Extension<Arc<AppServices>>) -> StatusCode {
    services.reset();
    StatusCode::OK
}
