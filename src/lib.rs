pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod fitness;
pub mod jobs;
pub mod models;
pub mod routes;
pub mod saved;
pub mod session;
pub mod telemetry;
pub mod views;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::fitness::{ExerciseData, ProfileData, ProgressData, WorkoutData};
use crate::jobs::JobBoard;
use crate::session::{SessionClient, StubSession, User};

/// Data and collaborators behind the fitness tracker pages.
pub struct FitnessTracker {
    pub exercises: ExerciseData,
    pub workouts: WorkoutData,
    pub profile: ProfileData,
    pub progress: ProgressData,
    pub session: Arc<dyn SessionClient>,
}

pub struct AppState {
    pub jobs: JobBoard,
    pub fitness: FitnessTracker,
}

impl AppState {
    pub fn new(config: &Config, session: Arc<dyn SessionClient>) -> anyhow::Result<Arc<Self>> {
        let catalog = Catalog::embedded()?;
        Ok(Arc::new(Self {
            jobs: JobBoard::new(catalog.jobs, config.search_delay),
            fitness: FitnessTracker {
                exercises: catalog.exercises,
                workouts: catalog.workouts,
                profile: catalog.profile,
                progress: catalog.progress,
                session,
            },
        }))
    }

    /// State wired to the in-process stub session for `config.user_email`.
    pub fn from_config(config: &Config) -> anyhow::Result<Arc<Self>> {
        let user = config.user_email.clone().map(|email| User { email });
        Self::new(config, Arc::new(StubSession::new(user)))
    }
}

pub fn app(state: Arc<AppState>, config: &Config) -> Router {
    let assets = Router::new()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .merge(routes::router())
        .merge(routes::jobs::router())
        .merge(routes::fitness::router())
        .merge(routes::api::router())
        .fallback(routes::not_found)
        .with_state(state)
        .merge(assets)
        .layer(TraceLayer::new_for_http())
}
