//! Review selection for read requests.
//!
//! Filters do not combine. A query resolves to exactly one [`QueryRule`],
//! picked in priority order: both dates, start date only, end date only,
//! location only, then everything. Whenever a date is present the location is
//! ignored.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ReviewError;
use crate::review::Review;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsed read-request criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// The single selection branch a query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRule<'a> {
    Between { start: NaiveDateTime, end: NaiveDateTime },
    Since(NaiveDateTime),
    Until(NaiveDateTime),
    AtLocation(&'a str),
    All,
}

impl ReviewQuery {
    /// Parse raw parameter values. Dates must be `YYYY-MM-DD`.
    pub fn parse(
        location: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, ReviewError> {
        Ok(Self {
            location: location.map(str::to_string),
            start_date: start_date.map(|v| parse_date("start_date", v)).transpose()?,
            end_date: end_date.map(|v| parse_date("end_date", v)).transpose()?,
        })
    }

    /// Resolve the criteria to one rule. Dates compare as start of day.
    pub fn rule(&self) -> QueryRule<'_> {
        let start = self.start_date.map(start_of_day);
        let end = self.end_date.map(start_of_day);

        match (start, end, self.location.as_deref()) {
            (Some(start), Some(end), _) => QueryRule::Between { start, end },
            (Some(start), None, _) => QueryRule::Since(start),
            (None, Some(end), _) => QueryRule::Until(end),
            (None, None, Some(location)) => QueryRule::AtLocation(location),
            (None, None, None) => QueryRule::All,
        }
    }
}

impl QueryRule<'_> {
    pub fn matches(&self, review: &Review) -> bool {
        match *self {
            QueryRule::Between { start, end } => start <= review.timestamp && review.timestamp <= end,
            QueryRule::Since(start) => review.timestamp >= start,
            QueryRule::Until(end) => review.timestamp <= end,
            QueryRule::AtLocation(location) => review.location == location,
            QueryRule::All => true,
        }
    }
}

fn parse_date(param: &'static str, value: &str) -> Result<NaiveDate, ReviewError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ReviewError::InvalidDate {
        param,
        value: value.to_string(),
    })
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::TIMESTAMP_FORMAT;

    fn review(location: &str, ts: &str) -> Review {
        Review {
            review_body: "text".into(),
            location: location.into(),
            review_id: format!("{location}-{ts}"),
            timestamp: NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap(),
        }
    }

    fn select<'a>(query: &ReviewQuery, reviews: &'a [Review]) -> Vec<&'a str> {
        let rule = query.rule();
        reviews
            .iter()
            .filter(|r| rule.matches(r))
            .map(|r| r.review_id.as_str())
            .collect()
    }

    fn fixture() -> Vec<Review> {
        vec![
            review("Phoenix, Arizona", "2022-12-31 23:59:59"),
            review("Tucson, Arizona", "2023-01-01 00:00:00"),
            review("Phoenix, Arizona", "2023-01-15 12:00:00"),
            review("Denver, Colorado", "2023-01-31 00:00:00"),
            review("Phoenix, Arizona", "2023-01-31 08:00:00"),
            review("Tucson, Arizona", "2023-02-01 10:00:00"),
        ]
    }

    #[test]
    fn test_rule_precedence_table() {
        let d = |s: &str| NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap();
        let loc = Some("Phoenix, Arizona".to_string());

        let both = ReviewQuery { location: loc.clone(), start_date: Some(d("2023-01-01")), end_date: Some(d("2023-01-31")) };
        assert!(matches!(both.rule(), QueryRule::Between { .. }));

        let start = ReviewQuery { location: loc.clone(), start_date: Some(d("2023-01-01")), end_date: None };
        assert!(matches!(start.rule(), QueryRule::Since(_)));

        let end = ReviewQuery { location: loc.clone(), start_date: None, end_date: Some(d("2023-01-31")) };
        assert!(matches!(end.rule(), QueryRule::Until(_)));

        let only_loc = ReviewQuery { location: loc, start_date: None, end_date: None };
        assert_eq!(only_loc.rule(), QueryRule::AtLocation("Phoenix, Arizona"));

        assert_eq!(ReviewQuery::default().rule(), QueryRule::All);
    }

    #[test]
    fn test_between_is_inclusive_at_start_of_day() {
        let reviews = fixture();
        let query = ReviewQuery::parse(None, Some("2023-01-01"), Some("2023-01-31")).unwrap();
        assert_eq!(
            select(&query, &reviews),
            vec![
                "Tucson, Arizona-2023-01-01 00:00:00",
                "Phoenix, Arizona-2023-01-15 12:00:00",
                "Denver, Colorado-2023-01-31 00:00:00",
            ]
        );
    }

    #[test]
    fn test_dates_override_location() {
        let reviews = fixture();
        let query = ReviewQuery::parse(Some("Phoenix, Arizona"), Some("2023-01-01"), Some("2023-01-31")).unwrap();
        let ids = select(&query, &reviews);
        assert!(ids.contains(&"Tucson, Arizona-2023-01-01 00:00:00"));
        assert!(ids.contains(&"Denver, Colorado-2023-01-31 00:00:00"));

        let since = ReviewQuery::parse(Some("Denver, Colorado"), Some("2023-02-01"), None).unwrap();
        assert_eq!(select(&since, &reviews), vec!["Tucson, Arizona-2023-02-01 10:00:00"]);
    }

    #[test]
    fn test_single_sided_bounds() {
        let reviews = fixture();

        let since = ReviewQuery::parse(None, Some("2023-01-31"), None).unwrap();
        assert_eq!(select(&since, &reviews).len(), 3);

        let until = ReviewQuery::parse(None, None, Some("2023-01-01")).unwrap();
        assert_eq!(
            select(&until, &reviews),
            vec!["Phoenix, Arizona-2022-12-31 23:59:59", "Tucson, Arizona-2023-01-01 00:00:00"]
        );
    }

    #[test]
    fn test_location_exact_match() {
        let reviews = fixture();
        let query = ReviewQuery::parse(Some("Phoenix, Arizona"), None, None).unwrap();
        assert_eq!(select(&query, &reviews).len(), 3);

        let lower = ReviewQuery::parse(Some("phoenix, arizona"), None, None).unwrap();
        assert!(select(&lower, &reviews).is_empty());
    }

    #[test]
    fn test_no_filters_selects_everything_in_order() {
        let reviews = fixture();
        let ids = select(&ReviewQuery::default(), &reviews);
        let expected: Vec<&str> = reviews.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_invalid_dates_are_rejected() {
        let err = ReviewQuery::parse(None, Some("2023-13-01"), None).unwrap_err();
        assert!(matches!(err, ReviewError::InvalidDate { param: "start_date", .. }));

        let err = ReviewQuery::parse(None, None, Some("01/31/2023")).unwrap_err();
        assert!(matches!(err, ReviewError::InvalidDate { param: "end_date", ref value } if value == "01/31/2023"));
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid end_date '01/31/2023': expected YYYY-MM-DD");
    }
}
