//! Default scorer backed by the complete VADER lexicon and rule set.

use reviewlens_core::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::traits::SentimentScorer;

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> Sentiment {
        let scores = self.analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        Sentiment {
            neg: score("neg"),
            neu: score("neu"),
            pos: score("pos"),
            compound: score("compound"),
        }
    }
}
