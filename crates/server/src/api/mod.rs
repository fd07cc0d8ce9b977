//! Review API endpoint modules.
//!
//! Shared response types and helpers live here in mod.rs.

pub mod doc;
mod form;
mod health;
mod reviews;

use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorDetailResponse {
    pub detail: String,
}

// ── Response helper ──────────────────────────────────────────────

/// Serialize `body` as the complete pretty-printed JSON response, with an explicit
/// `Content-Length` matching the bytes sent.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec_pretty(body) {
        Ok(bytes) => {
            let length = HeaderValue::from(bytes.len());
            (
                status,
                [
                    (CONTENT_TYPE, HeaderValue::from_static("application/json")),
                    (CONTENT_LENGTH, length),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            let body = r#"{"detail":"response serialization failed"}"#;
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [
                    (CONTENT_TYPE, HeaderValue::from_static("application/json")),
                    (CONTENT_LENGTH, HeaderValue::from(body.len())),
                ],
                body,
            )
                .into_response()
        }
    }
}

// ── Re-exports ───────────────────────────────────────────────────
// Flat `api::foo` paths for route registration in router.rs.

pub use health::health;
pub use reviews::{create_review, list_reviews};
