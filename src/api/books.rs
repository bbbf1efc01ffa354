//! Books API endpoints

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequestParts, Path, State},
    http::request::Parts,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::CreateBook,
    AppState,
};

use super::{BookResponse, BooksResponse, MessageResponse};

/// Book id taken from the `:id` path segment.
///
/// `None` means the segment can never match a row: it is not an integer, or
/// it could not be percent-decoded.
pub struct BookIdPath(pub Option<i64>);

#[async_trait]
impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => parse_book_id(&raw).map(BookIdPath),
            Err(rejection) => {
                tracing::debug!("Undecodable book id: {}", rejection);
                Ok(BookIdPath(None))
            }
        }
    }
}

/// An empty id is an input error. An id that is not an integer cannot match
/// any row and yields `Ok(None)`.
fn parse_book_id(raw: &str) -> AppResult<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::MissingId);
    }
    Ok(raw.parse::<i64>().ok())
}

/// Bare `/get_books/` and `/delete_book/` paths
pub async fn missing_id() -> AppError {
    AppError::MissingId
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/create_books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book added", body = MessageResponse),
        (status = 400, description = "Insert failed", body = crate::error::ErrorResponse),
        (status = 422, description = "Body could not be parsed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<CreateBook>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(data) = payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

    state.services.books.create(&data).await?;
    Ok(Json(MessageResponse::new("book has been added")))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/get_books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 400, description = "Empty id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Lookup failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> AppResult<Json<BookResponse>> {
    let id = id.ok_or_else(|| AppError::NotFound("non-numeric id".to_string()))?;

    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(BookResponse {
        message: "book fetched successfully".to_string(),
        data: book,
    }))
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = BooksResponse),
        (status = 400, description = "Query failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BooksResponse>> {
    let books = state.services.books.list().await?;
    Ok(Json(BooksResponse {
        message: "Fetched books successfully".to_string(),
        data: books,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/delete_book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Empty id", body = crate::error::ErrorResponse),
        (status = 500, description = "Delete failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> AppResult<Json<MessageResponse>> {
    if let Some(id) = id {
        state.services.books.delete(id).await?;
    }
    Ok(Json(MessageResponse::new("book deleted successfully")))
}
