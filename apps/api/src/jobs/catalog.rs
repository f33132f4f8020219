use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::job::JobListing;

/// In-memory job listings shared across handlers. Clones share storage.
#[derive(Clone, Default)]
pub struct JobCatalog {
    jobs: Arc<RwLock<Vec<JobListing>>>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobListing>) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(jobs)),
        }
    }

    pub async fn list(&self) -> Vec<JobListing> {
        self.jobs.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<JobListing> {
        self.jobs.read().await.iter().find(|j| j.id == id).cloned()
    }

    /// Listings in `ids` order; unknown ids are skipped.
    pub async fn get_many(&self, ids: &[String]) -> Vec<JobListing> {
        let jobs = self.jobs.read().await;
        ids.iter()
            .filter_map(|id| jobs.iter().find(|j| &j.id == id).cloned())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }
}
