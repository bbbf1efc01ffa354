//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{models::book::Book, AppState};

/// Plain acknowledgement body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Single book payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub message: String,
    pub data: Book,
}

/// Book list payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BooksResponse {
    pub message: String,
    pub data: Vec<Book>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Bare `/get_books/` and `/delete_book/` answer 400 rather than a routing 404.
    let books = Router::new()
        .route("/create_books", post(books::create_book))
        .route("/get_books/", get(books::missing_id))
        .route("/get_books/:id", get(books::get_book))
        .route("/books", get(books::list_books))
        .route("/delete_book/", delete(books::missing_id))
        .route("/delete_book/:id", delete(books::delete_book));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", books)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
