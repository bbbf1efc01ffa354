//! Error types for the Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Persistence and startup errors raised by the database layer
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid connection settings: {0}")]
    InvalidDsn(String),

    #[error("Could not connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Schema migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Book {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

/// Request-level error, one variant per client-visible outcome
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request body rejected: {0}")]
    InvalidBody(String),

    #[error("Book id is empty")]
    MissingId,

    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Create failed: {0}")]
    CreateFailed(#[source] DbError),

    #[error("Fetch failed: {0}")]
    FetchFailed(#[source] DbError),

    #[error("List failed: {0}")]
    ListFailed(#[source] DbError),

    #[error("Delete failed: {0}")]
    DeleteFailed(#[source] DbError),

    #[error("Database unavailable: {0}")]
    Unavailable(#[source] DbError),
}

impl AppError {
    /// Status code and client message for this error
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidBody(_) => (StatusCode::UNPROCESSABLE_ENTITY, "request failed"),
            AppError::MissingId => (StatusCode::BAD_REQUEST, "id cannot be empty"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "book not found"),
            AppError::CreateFailed(_) => (StatusCode::BAD_REQUEST, "could not create book"),
            AppError::FetchFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "could not get the book")
            }
            AppError::ListFailed(_) => (StatusCode::BAD_REQUEST, "could not get books"),
            AppError::DeleteFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "could not delete book")
            }
            AppError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "database unavailable"),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::InvalidBody(reason) => tracing::debug!("Rejected request body: {}", reason),
            AppError::MissingId | AppError::NotFound(_) => {}
            AppError::CreateFailed(e)
            | AppError::FetchFailed(e)
            | AppError::ListFailed(e)
            | AppError::DeleteFailed(e)
            | AppError::Unavailable(e) => {
                tracing::error!("{}: {:?}", message, e);
            }
        }

        let body = Json(ErrorResponse {
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for handler operations
pub type AppResult<T> = Result<T, AppError>;
