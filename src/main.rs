//! bookshelf server binary.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:8081/book
//!   curl http://localhost:8081/book/1
//!   curl -X POST http://localhost:8081/book \
//!        -H 'content-type: application/json' \
//!        -d '{"title":"Dune","author":"Frank Herbert"}'
//!   curl -X PUT http://localhost:8081/book/2 -d '{"title":"Dune Messiah"}'
//!   curl -X DELETE http://localhost:8081/book/1

use std::process::ExitCode;
use std::sync::Arc;

use bookshelf::{Config, Server, api};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Config::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), bookshelf::Error> {
    let store = Arc::new(config.store());
    info!(books = store.len(), "store initialized");

    Server::bind(config.addr).await?
        .serve(api::app(&config, store))
        .await
}
