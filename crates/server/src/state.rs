use std::sync::Arc;

use reviewlens_sentiment::SentimentScorer;
use reviewlens_storage::ReviewStore;

pub struct AppState {
    pub store: ReviewStore,
    pub scorer: Arc<dyn SentimentScorer>,
}

impl AppState {
    pub fn new(store: ReviewStore, scorer: Arc<dyn SentimentScorer>) -> Arc<Self> {
        Arc::new(Self { store, scorer })
    }
}
