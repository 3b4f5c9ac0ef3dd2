use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::views::ErrorPage;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(what) => {
                tracing::debug!(what = %what, "not found");
                let page = ErrorPage {
                    title: "Not found",
                    heading: "Page not found",
                    message: self.to_string(),
                };
                (StatusCode::NOT_FOUND, page).into_response()
            }
            AppError::Render(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                // Details stay in the log.
                let page = ErrorPage {
                    title: "Server error",
                    heading: "Something went wrong",
                    message: "The page could not be shown. Please try again.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
