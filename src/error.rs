//! Unified error type.

use std::net::SocketAddr;

/// The error type returned by bookshelf's fallible operations.
///
/// Book-level outcomes (missing ids, malformed bodies) are HTTP
/// [`Response`](crate::Response) values, never `Error`s. This type surfaces
/// infrastructure failures: binding the listener or reading its address.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
