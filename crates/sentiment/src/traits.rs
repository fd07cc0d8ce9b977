use reviewlens_core::Sentiment;

/// Maps text to polarity scores. Implementations must be pure: the same text
/// always yields the same scores.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> Sentiment;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> Sentiment + Send + Sync,
{
    fn polarity_scores(&self, text: &str) -> Sentiment {
        self(text)
    }
}
