//! HTTP router construction.
//!
//! Assembles the review routes, middleware, and OpenAPI docs into a single `Router`.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api;
use crate::state::AppState;

/// Build the complete application router with all routes and middleware.
///
/// Methods other than GET and POST on `/` are answered with 405 and an
/// `Allow` header by the method router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::list_reviews).post(api::create_review))
        .route("/health", get(api::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}
