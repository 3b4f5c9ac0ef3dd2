use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    filter::{JobQuery, SalaryBand, Selection},
    jobs::EMPLOYMENT_TYPES,
    views::{JobCard, JobDetailPage, JobsPage, SavedJobsPage, SelectOption},
    AppState,
};

const TITLE: &str = "JobHub";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/jobs", get(search))
        .route("/jobs/saved", get(saved))
        .route("/jobs/:id", get(detail))
        .route("/jobs/:id/save", post(toggle_save))
}

/// Query string of the search form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub q: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
}

impl SearchParams {
    pub fn to_query(&self) -> JobQuery {
        JobQuery {
            text: self.q.clone(),
            location: self.location.clone(),
            job_type: Selection::parse(self.job_type.as_deref()),
            salary: SalaryBand::parse(self.salary.as_deref()),
        }
    }
}

async fn search(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<SearchParams>,
) -> JobsPage {
    let query = params.to_query();
    let jobs = state.jobs.search(&query).await;

    let salary_options = SalaryBand::ALL
        .into_iter()
        .map(|band| SelectOption {
            value: band.value().to_string(),
            label: band.label().to_string(),
            selected: band == query.salary,
        })
        .collect();

    JobsPage {
        title: TITLE,
        saved_count: state.jobs.saved_count(),
        type_options: SelectOption::list("All Types", &EMPLOYMENT_TYPES, &query.job_type),
        salary_options,
        jobs: jobs
            .into_iter()
            .map(|job| JobCard {
                saved: state.jobs.is_saved(&job.id),
                job,
            })
            .collect(),
        search: params.q,
        location: params.location,
        return_to: uri.to_string(),
    }
}

async fn saved(State(state): State<Arc<AppState>>) -> SavedJobsPage {
    let jobs = state
        .jobs
        .saved_postings()
        .into_iter()
        .map(|job| JobCard {
            job: job.clone(),
            saved: true,
        })
        .collect();
    SavedJobsPage {
        title: TITLE,
        saved_count: state.jobs.saved_count(),
        jobs,
        return_to: "/jobs/saved".to_string(),
    }
}

async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<JobDetailPage> {
    let job = state
        .jobs
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("job {id}")))?;
    Ok(JobDetailPage {
        title: TITLE,
        saved_count: state.jobs.saved_count(),
        saved: state.jobs.is_saved(&id),
        return_to: format!("/jobs/{id}"),
        job: job.clone(),
    })
}

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub next: Option<String>,
}

async fn toggle_save(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<SaveForm>,
) -> AppResult<Redirect> {
    state
        .jobs
        .toggle_saved(&id)
        .ok_or_else(|| AppError::NotFound(format!("job {id}")))?;
    Ok(Redirect::to(local_path(form.next.as_deref())))
}

/// Only same-site paths made of visible ASCII are followed after a toggle.
fn local_path(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && path.bytes().all(|b| b.is_ascii_graphic()) =>
        {
            path
        }
        _ => "/jobs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirects_stay_on_site() {
        assert_eq!(local_path(Some("/jobs?q=react")), "/jobs?q=react");
        assert_eq!(local_path(Some("/jobs/3")), "/jobs/3");
        assert_eq!(local_path(Some("//evil.example")), "/jobs");
        assert_eq!(local_path(Some("https://evil.example")), "/jobs");
        assert_eq!(local_path(Some("/\\evil.example")), "/jobs");
        assert_eq!(local_path(None), "/jobs");
    }

    #[test]
    fn redirects_reject_control_characters() {
        assert_eq!(local_path(Some("/jobs\nevil")), "/jobs");
        assert_eq!(local_path(Some("/jobs?q=a b")), "/jobs");
        assert_eq!(local_path(Some("/jobs/caf\u{e9}")), "/jobs");
    }

    #[test]
    fn params_map_to_query() {
        let params = SearchParams {
            q: "react".into(),
            location: String::new(),
            job_type: Some("all".into()),
            salary: Some("100k-150k".into()),
        };
        let query = params.to_query();
        assert_eq!(query.text, "react");
        assert_eq!(query.job_type, Selection::All);
        assert_eq!(query.salary, SalaryBand::From100kTo150k);
    }
}
