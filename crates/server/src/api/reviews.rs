//! Review listing and submission on `/`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::Response;
use tracing::{debug, info, warn};

use reviewlens_core::{Review, ReviewError, ReviewQuery};
use reviewlens_sentiment::rank_by_sentiment;

use crate::state::AppState;

use super::form::FormFields;
use super::{json_response, ErrorDetailResponse};

/// List reviews matching the filters, ranked by compound sentiment.
///
/// A date bound (`start_date` / `end_date`) takes precedence over `location`.
/// Blank parameters count as absent; repeated ones use the first non-blank value.
#[utoipa::path(
    get,
    path = "/",
    tag = "Reviews",
    params(
        ("location" = Option<String>, Query, description = "Exact location, e.g. `Tucson, Arizona`. Ignored when a date bound is given"),
        ("start_date" = Option<String>, Query, description = "Inclusive lower bound, YYYY-MM-DD (midnight)"),
        ("end_date" = Option<String>, Query, description = "Inclusive upper bound, YYYY-MM-DD (midnight)")
    ),
    responses(
        (status = 200, description = "Reviews with sentiment, highest compound first", body = Object),
        (status = 400, description = "Malformed date parameter", body = ErrorDetailResponse)
    )
)]
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let fields = FormFields::parse(raw.as_deref().unwrap_or_default().as_bytes());
    let query = match ReviewQuery::parse(
        fields.first("location"),
        fields.first("start_date"),
        fields.first("end_date"),
    ) {
        Ok(query) => query,
        Err(e) => {
            warn!("Rejected review query: {}", e);
            return json_response(
                status_for(&e),
                &ErrorDetailResponse { detail: e.to_string() },
            );
        }
    };

    let reviews = state.store.select(&query).await;
    let ranked = rank_by_sentiment(reviews, state.scorer.as_ref());
    debug!(count = ranked.len(), "serving ranked reviews");
    json_response(StatusCode::OK, &ranked)
}

/// Accept a form submission with `Location` and `ReviewBody`.
///
/// Invalid submissions get 400 with an empty JSON object and leave the
/// store untouched.
#[utoipa::path(
    post,
    path = "/",
    tag = "Reviews",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "Form fields `Location` (allow-listed) and `ReviewBody`"
    ),
    responses(
        (status = 201, description = "Stored review with generated ReviewId and Timestamp", body = Object),
        (status = 400, description = "Missing field or location not allowed; body is `{}`", body = Object)
    )
)]
pub async fn create_review(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let fields = FormFields::parse(&body);
    match Review::from_submission(fields.first("Location"), fields.first("ReviewBody")) {
        Ok(review) => {
            let total = state.store.append(review.clone()).await;
            info!(review_id = %review.review_id, location = %review.location, total, "review stored");
            json_response(StatusCode::CREATED, &review)
        }
        Err(e) => {
            warn!("Rejected review submission: {}", e);
            json_response(status_for(&e), &serde_json::Map::new())
        }
    }
}

/// 400 for bad request input, 500 for anything else.
fn status_for(err: &ReviewError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
