use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

/// Map a domain failure to its wire status.
///
/// The contract admits only 404 for lookups by id, so malformed generated-id
/// tokens (`InvalidId`) land there too; an unparseable token can never name
/// a document. Duplicate registration stays 400 to match the wire contract.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg),
        DomainError::InvalidId(_) | DomainError::NotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "not found")
        }
    }
}

/// Missing fields, wrong types, and unparseable JSON all surface as 400.
pub fn body_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
