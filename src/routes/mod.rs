use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{error::AppError, views::IndexPage, AppState};

pub mod api;
pub mod fitness;
pub mod jobs;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
}

async fn index() -> IndexPage {
    IndexPage {
        title: "Demo boards",
    }
}

async fn healthz() -> &'static str {
    "ok"
}

pub async fn not_found() -> AppError {
    AppError::NotFound("page".to_string())
}
