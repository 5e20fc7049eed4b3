//! # bookshelf
//!
//! An in-memory CRUD JSON API over a shelf of books.
//!
//! ## Routes
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | /book | list every book, in storage order |
//! | GET | /book/{id} | one book, or a zero-value book |
//! | POST | /book | create with a fresh id |
//! | PUT | /book/{id} | replace and move to the tail |
//! | DELETE | /book/{id} | remove, answer the remaining list |
//! | GET | /healthz, /readyz | Kubernetes probes |
//!
//! Every book response is `200 OK` with `Content-Type: application/json`,
//! whatever the outcome. Bodies are decoded leniently: malformed JSON is a
//! zero-value book, not an error.
//!
//! ## State
//!
//! One [`BookStore`] per process: a `Vec<Book>` and an id counter behind a
//! single mutex. Nothing is persisted.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bookshelf::{Config, Server, api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bookshelf::Error> {
//!     let config = Config::default();
//!     let store = Arc::new(config.store());
//!
//!     Server::bind(config.addr).await?
//!         .serve(api::app(&config, store))
//!         .await
//! }
//! ```

mod book;
mod config;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;
mod store;

pub mod api;
pub mod health;
pub mod middleware;

pub use book::Book;
pub use config::{Config, DEFAULT_PORT};
pub use error::Error;
pub use handler::{Handler, with_state};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::{BookStore, seed_book};
