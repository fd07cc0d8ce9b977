use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Malformed timestamp '{value}' on row {row}: expected YYYY-MM-DD HH:MM:SS")]
    MalformedTimestamp { row: usize, value: String },

    #[error("Duplicate ReviewId '{0}' in review source")]
    DuplicateReviewId(String),

    #[error("Invalid {param} '{value}': expected YYYY-MM-DD")]
    InvalidDate { param: &'static str, value: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Location not allowed: {0}")]
    UnknownLocation(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),
}

impl ReviewError {
    /// True for errors caused by request input rather than server state.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ReviewError::InvalidDate { .. }
                | ReviewError::MissingField(_)
                | ReviewError::UnknownLocation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_request_problems() {
        assert!(ReviewError::MissingField("ReviewBody").is_client_error());
        assert!(ReviewError::UnknownLocation("Atlantis".into()).is_client_error());
        assert!(ReviewError::InvalidDate { param: "start_date", value: "x".into() }.is_client_error());
    }

    #[test]
    fn test_load_failures_are_not_client_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!ReviewError::from(io).is_client_error());
        assert!(!ReviewError::DuplicateReviewId("a".into()).is_client_error());
        assert!(!ReviewError::MalformedTimestamp { row: 3, value: "x".into() }.is_client_error());
        assert!(!ReviewError::Lexicon("bad".into()).is_client_error());
    }
}
