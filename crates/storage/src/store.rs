use std::path::Path;
use std::sync::Arc;

use reviewlens_core::{Review, ReviewError, ReviewQuery};
use reviewlens_ingest::CsvImporter;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared, append-only review collection in insertion order.
///
/// Clones share the same underlying vector. Appends take the write lock, so
/// concurrent submissions never lose an update.
#[derive(Clone, Default)]
pub struct ReviewStore {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Arc::new(RwLock::new(reviews)),
        }
    }

    /// Seed a store from a review CSV. Any read or parse failure is returned
    /// unchanged so startup can abort.
    pub fn load(path: &Path) -> Result<Self, ReviewError> {
        CsvImporter::import(path).map(Self::from_reviews)
    }

    /// Append to the end. Returns the new length.
    pub async fn append(&self, review: Review) -> usize {
        let mut reviews = self.reviews.write().await;
        debug!(review_id = %review.review_id, "appending review");
        reviews.push(review);
        reviews.len()
    }

    /// Clone out the reviews matching `query`, in store order.
    pub async fn select(&self, query: &ReviewQuery) -> Vec<Review> {
        let rule = query.rule();
        let reviews = self.reviews.read().await;
        reviews.iter().filter(|r| rule.matches(r)).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.reviews.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reviews.read().await.is_empty()
    }
}
