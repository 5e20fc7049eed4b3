//! The book routes.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | /book | [`list_books`] |
//! | GET | /book/{id} | [`get_book`] |
//! | POST | /book | [`create_book`] |
//! | PUT | /book/{id} | [`update_book`] |
//! | DELETE | /book/{id} | [`delete_book`] |
//!
//! Every outcome is `200 OK` with `Content-Type: application/json`. A
//! missing book is signalled in the body, never in the status: Get answers a
//! zero-value book, Update an empty body, Delete the unchanged list.

use std::sync::Arc;

use crate::book::Book;
use crate::config::Config;
use crate::handler::with_state;
use crate::health;
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::store::BookStore;

/// The full application router: book routes, health probes, and the CORS
/// policy from `config`.
pub fn app(config: &Config, store: Arc<BookStore>) -> Router {
    let router = routes(store);
    match &config.cors {
        Some(cors) => router.cors(cors.clone()),
        None => router,
    }
}

/// Book routes and health probes over `store`, without CORS.
pub fn routes(store: Arc<BookStore>) -> Router {
    Router::new()
        .on(Method::Get,    "/book",      with_state(&store, list_books))
        .on(Method::Get,    "/book/{id}", with_state(&store, get_book))
        .on(Method::Post,   "/book",      with_state(&store, create_book))
        .on(Method::Put,    "/book/{id}", with_state(&store, update_book))
        .on(Method::Delete, "/book/{id}", with_state(&store, delete_book))
        .on(Method::Get,    "/healthz",   health::liveness)
        .on(Method::Get,    "/readyz",    with_state(&store, health::readiness))
}

// The router only dispatches `/book/{id}` when the segment is present.
fn path_id(req: &Request) -> &str {
    req.param("id").unwrap_or_default()
}

// GET /book
pub async fn list_books(store: Arc<BookStore>, _req: Request) -> Json<Vec<Book>> {
    Json(store.list())
}

// GET /book/{id}  → the book, or a zero-value book
pub async fn get_book(store: Arc<BookStore>, req: Request) -> Json<Book> {
    Json(store.get(path_id(&req)).unwrap_or_default())
}

// POST /book
pub async fn create_book(store: Arc<BookStore>, req: Request) -> Json<Book> {
    let book = Book::from_json_lenient(req.body());
    Json(store.create(book))
}

// PUT /book/{id}  → the updated book, or an empty JSON-typed body
pub async fn update_book(store: Arc<BookStore>, req: Request) -> Response {
    let book = Book::from_json_lenient(req.body());
    match store.update(path_id(&req), book) {
        Some(updated) => Json(updated).into_response(),
        None => Response::json(Vec::new()),
    }
}

// DELETE /book/{id}  → whatever remains
pub async fn delete_book(store: Arc<BookStore>, req: Request) -> Json<Vec<Book>> {
    Json(store.delete(path_id(&req)))
}
