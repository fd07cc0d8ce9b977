use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use reviewlens_core::{Review, ReviewError, TIMESTAMP_FORMAT};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

/// One row of the seed CSV. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct ReviewRow {
    #[serde(rename = "ReviewId", default)]
    review_id: Option<String>,
    #[serde(rename = "ReviewBody")]
    review_body: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Timestamp")]
    timestamp: String,
}

pub struct CsvImporter;

impl CsvImporter {
    /// Read every row of a review CSV into memory, in file order.
    ///
    /// `Location` and `Timestamp` are kept as written. Rows without a
    /// `ReviewId` get a fresh one; a repeated id rejects the whole file.
    pub fn import(path: &Path) -> Result<Vec<Review>, ReviewError> {
        let file = std::fs::File::open(path).map_err(ReviewError::Io)?;
        let reviews = Self::import_reader(file)?;
        info!("Imported {} reviews from {}", reviews.len(), path.display());
        Ok(reviews)
    }

    pub fn import_reader<R: Read>(reader: R) -> Result<Vec<Review>, ReviewError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
        let mut reviews = Vec::new();
        let mut seen_ids = HashSet::new();

        for (idx, result) in reader.deserialize::<ReviewRow>().enumerate() {
            let row_number = idx + 1;
            let row = result.map_err(|e| ReviewError::Csv(e.to_string()))?;

            let timestamp = NaiveDateTime::parse_from_str(row.timestamp.trim(), TIMESTAMP_FORMAT)
                .map_err(|_| ReviewError::MalformedTimestamp {
                    row: row_number,
                    value: row.timestamp.clone(),
                })?;

            let review_id = match row.review_id.filter(|id| !id.trim().is_empty()) {
                Some(id) => id,
                None => {
                    debug!(row = row_number, "row has no ReviewId, generating one");
                    Uuid::new_v4().to_string()
                }
            };
            if !seen_ids.insert(review_id.clone()) {
                return Err(ReviewError::DuplicateReviewId(review_id));
            }

            reviews.push(Review {
                review_body: row.review_body,
                location: row.location,
                review_id,
                timestamp,
            });
        }

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = "\
ReviewId,Location,Timestamp,ReviewBody,Stars
a1,\"Phoenix, Arizona\",2023-01-15 09:30:00,Great service!,5
a2,Atlantis,2022-07-04 18:00:00,\"Slow, cold, and rude.\",1
";

    #[test]
    fn test_import_preserves_order_and_fields() {
        let reviews = CsvImporter::import_reader(SEED.as_bytes()).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].review_id, "a1");
        assert_eq!(reviews[0].location, "Phoenix, Arizona");
        assert_eq!(reviews[0].review_body, "Great service!");
        assert_eq!(
            reviews[0].timestamp.format(TIMESTAMP_FORMAT).to_string(),
            "2023-01-15 09:30:00"
        );
        // Locations are loaded as-is, even outside the allow-list.
        assert_eq!(reviews[1].location, "Atlantis");
        assert_eq!(reviews[1].review_body, "Slow, cold, and rude.");
    }

    #[test]
    fn test_missing_review_id_column_generates_ids() {
        let csv = "ReviewBody,Location,Timestamp\nok,\"Denver, Colorado\",2023-03-01 10:00:00\nfine,\"Denver, Colorado\",2023-03-02 10:00:00\n";
        let reviews = CsvImporter::import_reader(csv.as_bytes()).unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(Uuid::parse_str(&reviews[0].review_id).is_ok());
        assert_ne!(reviews[0].review_id, reviews[1].review_id);
    }

    #[test]
    fn test_empty_review_id_is_generated() {
        let csv = "ReviewId,ReviewBody,Location,Timestamp\n,ok,\"Denver, Colorado\",2023-03-01 10:00:00\n";
        let reviews = CsvImporter::import_reader(csv.as_bytes()).unwrap();
        assert!(Uuid::parse_str(&reviews[0].review_id).is_ok());
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let csv = "ReviewBody,Location,Timestamp\nok,\"Denver, Colorado\",2023-03-01\n";
        let err = CsvImporter::import_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ReviewError::MalformedTimestamp { row: 1, .. }));
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let csv = "ReviewBody,Timestamp\nok,2023-03-01 10:00:00\n";
        let err = CsvImporter::import_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ReviewError::Csv(msg) if msg.contains("Location")));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let csv = "ReviewId,ReviewBody,Location,Timestamp\nx,a,L,2023-03-01 10:00:00\nx,b,L,2023-03-02 10:00:00\n";
        let err = CsvImporter::import_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ReviewError::DuplicateReviewId(id) if id == "x"));
    }

    #[test]
    fn test_import_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("reviews.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(SEED.as_bytes())
            .unwrap();

        let reviews = CsvImporter::import(&path).unwrap();
        assert_eq!(reviews.len(), 2);
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = CsvImporter::import(&tmp.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, ReviewError::Io(_)));
    }
}
