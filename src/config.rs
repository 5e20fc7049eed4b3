//! Service configuration.
//!
//! Everything is a compile-time default; the service reads no environment
//! variables or files. Only `RUST_LOG` (log verbosity) is read, by the
//! binary's subscriber.

use std::net::{Ipv4Addr, SocketAddr};

use crate::middleware::Cors;
use crate::store::BookStore;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Clone, Debug)]
pub struct Config {
    /// Listening address. `0.0.0.0:8081` by default.
    pub addr: SocketAddr,
    /// CORS policy, or `None` to send no `Access-Control-*` headers.
    pub cors: Option<Cors>,
    /// Start with the seed book on the shelf.
    pub seed: bool,
}

impl Config {
    /// The store this configuration starts with.
    pub fn store(&self) -> BookStore {
        if self.seed { BookStore::seeded() } else { BookStore::new() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            cors: Some(Cors::permissive()),
            seed: true,
        }
    }
}
