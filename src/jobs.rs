use std::time::Duration;

use crate::filter::{self, JobQuery};
use crate::models::JobPosting;
use crate::saved::SavedJobs;

pub const EMPLOYMENT_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Internship"];

/// The JobHub listing: fixed postings plus the visitor's saved set.
#[derive(Debug)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
    saved: SavedJobs,
    search_delay: Duration,
}

impl JobBoard {
    pub fn new(postings: Vec<JobPosting>, search_delay: Duration) -> Self {
        Self {
            postings,
            saved: SavedJobs::default(),
            search_delay,
        }
    }

    /// Waits out the simulated network latency, then filters.
    pub async fn search(&self, query: &JobQuery) -> Vec<JobPosting> {
        if !self.search_delay.is_zero() {
            tokio::time::sleep(self.search_delay).await;
        }
        let found: Vec<JobPosting> = filter::apply(&self.postings, query)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            text = %query.text,
            location = %query.location,
            matches = found.len(),
            "job search"
        );
        found
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|job| job.id == id)
    }

    /// Returns the new membership, or `None` for an unknown posting.
    pub fn toggle_saved(&self, id: &str) -> Option<bool> {
        self.get(id)?;
        let saved = self.saved.toggle(id);
        tracing::info!(job = id, saved, "toggled saved job");
        Some(saved)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    /// Saved postings in listing order.
    pub fn saved_postings(&self) -> Vec<&JobPosting> {
        self.postings
            .iter()
            .filter(|job| self.saved.contains(&job.id))
            .collect()
    }
}
