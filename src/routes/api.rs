use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{models::JobPosting, routes::jobs::SearchParams, AppState};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/jobs", get(search_jobs))
}

#[derive(Debug, Serialize)]
pub struct ApiJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub saved: bool,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub total: usize,
    pub jobs: Vec<ApiJob>,
}

async fn search_jobs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<JobSearchResponse> {
    let jobs: Vec<ApiJob> = state
        .jobs
        .search(&params.to_query())
        .await
        .into_iter()
        .map(|job| ApiJob {
            saved: state.jobs.is_saved(&job.id),
            job,
        })
        .collect();
    Json(JobSearchResponse {
        total: jobs.len(),
        jobs,
    })
}
