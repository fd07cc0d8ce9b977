use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReviewError;
use crate::location::canonical_location;

/// Unique review identifier (hyphenated UUID for generated reviews).
pub type ReviewId = String;

/// Wire and storage format for review timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single customer review as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewBody")]
    pub review_body: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "ReviewId")]
    pub review_id: ReviewId,
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

impl Review {
    /// Build a review from submitted form fields.
    ///
    /// Both fields must be present and non-empty, and the location must be on
    /// the allow-list. Id and timestamp are generated here, never taken from
    /// the client.
    pub fn from_submission(
        location: Option<&str>,
        review_body: Option<&str>,
    ) -> Result<Self, ReviewError> {
        let review_body = review_body
            .filter(|b| !b.is_empty())
            .ok_or(ReviewError::MissingField("ReviewBody"))?;
        let location = location
            .filter(|l| !l.is_empty())
            .ok_or(ReviewError::MissingField("Location"))?;
        let canonical = canonical_location(location)
            .ok_or_else(|| ReviewError::UnknownLocation(location.to_string()))?;

        Ok(Self {
            review_body: review_body.to_string(),
            location: canonical.to_string(),
            review_id: Uuid::new_v4().to_string(),
            timestamp: now_seconds(),
        })
    }
}

/// Current local time truncated to whole seconds.
pub fn now_seconds() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Polarity scores for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A review annotated with its query-time sentiment. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: Sentiment,
}

pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
