use std::cmp::Ordering;

use reviewlens_core::{Review, ScoredReview};

use crate::traits::SentimentScorer;

/// Score every review and order by compound sentiment, highest first.
///
/// The sort is stable, so reviews with equal compound scores keep their
/// store order.
pub fn rank_by_sentiment<S>(reviews: Vec<Review>, scorer: &S) -> Vec<ScoredReview>
where
    S: SentimentScorer + ?Sized,
{
    let mut scored: Vec<ScoredReview> = reviews
        .into_iter()
        .map(|review| {
            let sentiment = scorer.polarity_scores(&review.review_body);
            ScoredReview { review, sentiment }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.sentiment
            .compound
            .partial_cmp(&a.sentiment.compound)
            .unwrap_or(Ordering::Equal)
    });
    scored
}
