//! OpenAPI documentation aggregator.
//!
//! Collects the `#[utoipa::path]`-annotated handlers into a single OpenAPI
//! document, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "reviewlens API",
        version = "0.1.0",
        description = "Customer reviews filtered by location or date and ranked by sentiment.",
    ),
    tags(
        (name = "Reviews", description = "Review listing with sentiment ranking, and review submission"),
        (name = "Health", description = "Server liveness"),
    ),
    paths(
        crate::api::reviews::list_reviews,
        crate::api::reviews::create_review,
        crate::api::health::health,
    ),
    components(schemas(
        crate::api::ErrorDetailResponse,
        crate::api::health::HealthResponse,
    ))
)]
pub struct ApiDoc;
