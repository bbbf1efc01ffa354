//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;

use crate::{
    error::DbResult,
    models::book::{Book, CreateBook},
};

pub use books::BooksRepository;

/// Persistence capability handed to the request handlers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a book and return it with its assigned id
    async fn create(&self, data: &CreateBook) -> DbResult<Book>;

    /// Fetch one book, `DbError::NotFound` when no row matches
    async fn get_by_id(&self, id: i64) -> DbResult<Book>;

    /// All books ordered by id
    async fn list(&self) -> DbResult<Vec<Book>>;

    /// Delete by id, returning the number of rows removed
    async fn delete(&self, id: i64) -> DbResult<u64>;

    /// Round trip to the database
    async fn ping(&self) -> DbResult<()>;
}
