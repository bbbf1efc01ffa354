//! Books service
//!
//! Each operation makes exactly one store call and folds its failure into
//! the operation-specific [`AppError`] that decides the response.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, DbError},
    models::book::{Book, CreateBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let book = self
            .store
            .create(data)
            .await
            .map_err(AppError::CreateFailed)?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(book)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.store.get_by_id(id).await.map_err(|e| match e {
            DbError::NotFound(id) => AppError::NotFound(id.to_string()),
            other => AppError::FetchFailed(other),
        })
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await.map_err(AppError::ListFailed)
    }

    /// Succeeds whether or not a row matched
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.store.delete(id).await.map_err(AppError::DeleteFailed)?;
        if removed == 0 {
            tracing::debug!(book_id = id, "Delete matched no book");
        } else {
            tracing::info!(book_id = id, "Book deleted");
        }
        Ok(())
    }

    /// Readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await.map_err(AppError::Unavailable)
    }
}
