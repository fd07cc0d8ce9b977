//! Sentiment scoring and ranking for reviews.
//!
//! The scorer is a capability behind [`SentimentScorer`]; the server holds it
//! as `Arc<dyn SentimentScorer>` so tests can swap in a fixed stub.

pub mod lexicon;
mod lexicon_data;
pub mod rank;
pub mod traits;
pub mod vader;

pub use lexicon::LexiconScorer;
pub use rank::rank_by_sentiment;
pub use traits::SentimentScorer;
pub use vader::VaderScorer;
