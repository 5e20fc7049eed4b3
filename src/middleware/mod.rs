//! Middleware layer.
//!
//! Cross-cutting concerns applied around every routed request:
//!
//! - [`Cors`]: preflight answers and `Access-Control-*` headers for the
//!   browser front end, which is served from another origin.
//! - `trace`: a per-request span with method and path, and a completion
//!   event with status and latency.

mod cors;
pub(crate) mod trace;

pub use cors::Cors;
