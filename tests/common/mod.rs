//! Shared harness: a live server on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use bookshelf::{BookStore, Config, Server, api};
use tokio::sync::oneshot;

pub struct TestServer {
    pub base: String,
    pub store: Arc<BookStore>,
    pub client: reqwest::Client,
    // Dropping the sender resolves the shutdown signal.
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    /// Default config (seed book, permissive CORS) on `127.0.0.1:0`.
    pub async fn start() -> Self {
        Self::with_config(Config::default()).await
    }

    pub async fn with_config(config: Config) -> Self {
        let config = Config { addr: SocketAddr::from(([127, 0, 0, 1], 0)), ..config };
        let store = Arc::new(config.store());
        let server = Server::bind(config.addr).await.unwrap();
        let addr = server.local_addr().unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        let router = api::app(&config, Arc::clone(&store));
        tokio::spawn(async move {
            server
                .serve_with_shutdown(router, async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            base: format!("http://{addr}"),
            store,
            client: reqwest::Client::new(),
            _shutdown: tx,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn list(&self) -> Vec<serde_json::Value> {
        self.client.get(self.url("/book")).send().await.unwrap().json().await.unwrap()
    }

    pub async fn ids(&self) -> Vec<String> {
        self.list()
            .await
            .iter()
            .map(|b| b["id"].as_str().unwrap_or_default().to_owned())
            .collect()
    }
}

/// Asserts the response is `200 OK` with a JSON content type.
pub fn assert_json_ok(resp: &reqwest::Response) {
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "application/json");
}
