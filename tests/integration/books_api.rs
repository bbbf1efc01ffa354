//! Router tests against an in-memory store

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use bookshelf_server::{
    api::create_router,
    models::{Book, CreateBook},
    repository::BookStore,
    AppState, DbError, DbResult,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for oneshot

#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<Book>>,
    next_id: Mutex<i64>,
}

impl MemoryStore {
    fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn create(&self, data: &CreateBook) -> DbResult<Book> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let book = data.clone().into_book(*next_id);
        self.rows.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Book> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(DbError::NotFound(id))
    }

    async fn list(&self) -> DbResult<Vec<Book>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete(&self, id: i64) -> DbResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|book| book.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}

fn app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (create_router(AppState::new(store.clone())), store)
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let req = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn created_book_appears_once_in_listing() {
    let (app, _) = app();

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/create_books",
        Some(json!({ "author": "A", "title": "T", "publisher": "P" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "book has been added" }));

    let (status, body) = call(&app, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fetched books successfully");

    let books = body["data"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["author"], "A");
    assert_eq!(books[0]["title"], "T");
    assert_eq!(books[0]["publisher"], "P");
    assert!(books[0]["id"].is_i64());
}

#[tokio::test]
async fn each_create_gets_a_fresh_id() {
    let (app, _) = app();

    for title in ["One", "Two", "Three"] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/create_books",
            Some(json!({ "title": title })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = call(&app, Method::GET, "/api/books", None).await;
    let mut ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|book| book["id"].as_i64().unwrap())
        .collect();
    ids.dedup();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn never_created_id_is_not_found() {
    let (app, _) = app();

    let (status, body) = call(&app, Method::GET, "/api/get_books/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "book not found" }));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (app, store) = app();

    call(
        &app,
        Method::POST,
        "/api/create_books",
        Some(json!({ "author": "A", "title": "T", "publisher": "P" })),
    )
    .await;

    let (status, body) = call(&app, Method::GET, "/api/get_books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);

    let (status, body) = call(&app, Method::DELETE, "/api/delete_book/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "book deleted successfully" }));
    assert_eq!(store.len(), 0);

    let (status, _) = call(&app, Method::GET, "/api/get_books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_table_lists_as_empty_array() {
    let (app, _) = app();

    let (status, body) = call(&app, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn malformed_body_leaves_row_count_unchanged() {
    let (app, store) = app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/create_books")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn missing_content_type_is_unprocessable() {
    let (app, store) = app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/create_books")
        .body(Body::from(r#"{"title":"T"}"#))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn delete_of_unknown_id_still_succeeds() {
    let (app, _) = app();

    let (status, body) = call(&app, Method::DELETE, "/api/delete_book/77", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "book deleted successfully" }));
}

#[tokio::test]
async fn blank_ids_are_bad_requests() {
    let (app, _) = app();

    let (status, _) = call(&app, Method::GET, "/api/get_books/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, Method::GET, "/api/get_books/%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, Method::DELETE, "/api/delete_book/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
