use axum::{
    routing::{get, post},
    Router,
};

pub mod inventory;
pub mod products;
pub mod statistics;
pub mod system;
pub mod warehouses;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/cleanup", post(system::cleanup))
        .nest("/product", products::router())
        .nest("/warehouses", warehouses::router())
        .nest("/statistics", statistics::router())
}
