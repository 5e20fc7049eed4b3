//! Kubernetes health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |

use std::sync::Arc;

use serde::Serialize;

use crate::Request;
use crate::response::Json;
use crate::store::BookStore;

/// Liveness probe. Always `200 OK` with body `"ok"`; it touches nothing.
pub async fn liveness(_req: Request) -> &'static str {
    "ok"
}

#[derive(Serialize)]
pub struct Readiness {
    status: &'static str,
    books: usize,
}

/// Readiness probe. Takes the store lock once, so a wedged store shows up
/// as a probe timeout.
pub async fn readiness(store: Arc<BookStore>, _req: Request) -> Json<Readiness> {
    Json(Readiness { status: "ready", books: store.len() })
}
