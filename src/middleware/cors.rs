//! Cross-origin resource sharing.

use crate::response::Response;
use crate::status::Status;

/// CORS policy applied by the [`Router`](crate::Router).
///
/// [`Cors::permissive`] allows any origin to call the book API with JSON
/// bodies.
#[derive(Clone, Debug)]
pub struct Cors {
    allow_origin: String,
    allow_methods: String,
    allow_headers: String,
}

impl Cors {
    pub fn permissive() -> Self {
        Self {
            allow_origin: "*".to_owned(),
            allow_methods: "GET, POST, PUT, DELETE, OPTIONS".to_owned(),
            allow_headers: "Content-Type".to_owned(),
        }
    }

    /// `200 OK`, empty body, CORS headers. Answers any `OPTIONS` request.
    pub(crate) fn preflight(&self) -> Response {
        self.apply(Response::status(Status::Ok))
    }

    pub(crate) fn apply(&self, mut response: Response) -> Response {
        response.append_header("access-control-allow-origin", &self.allow_origin);
        response.append_header("access-control-allow-methods", &self.allow_methods);
        response.append_header("access-control-allow-headers", &self.allow_headers);
        response
    }
}

impl Default for Cors {
    fn default() -> Self { Self::permissive() }
}
