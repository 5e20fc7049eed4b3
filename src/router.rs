//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Register a path, get a
//! handler. CORS, when configured, is the only cross-cutting layer.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::Cors;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    cors: Option<Cors>,
}

/// Outcome of routing one request.
pub(crate) enum Lookup {
    Found(BoxedHandler, HashMap<String, String>),
    /// The path is registered, but not for this method. Carries the methods
    /// it is registered for, sorted.
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), cors: None }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    /// Answer preflight requests and decorate every response with `cors`.
    pub fn cors(mut self, cors: Cors) -> Self {
        self.cors = Some(cors);
        self
    }

    pub(crate) fn cors_layer(&self) -> Option<&Cors> {
        self.cors.as_ref()
    }

    /// `method` is `None` for methods outside [`Method`].
    pub(crate) fn lookup(&self, method: Option<Method>, path: &str) -> Lookup {
        let found = method
            .and_then(|m| self.routes.get(&m))
            .and_then(|tree| tree.at(path).ok());

        if let Some(matched) = found {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Lookup::Found(handler, params);
        }

        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();

        if allowed.is_empty() {
            Lookup::NotFound
        } else {
            allowed.sort();
            Lookup::MethodNotAllowed(allowed)
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Request, Response};

    async fn noop(_req: Request) -> Response { Response::text("") }

    fn router() -> Router {
        Router::new()
            .on(Method::Get, "/book", noop)
            .on(Method::Get, "/book/{id}", noop)
            .on(Method::Put, "/book/{id}", noop)
            .on(Method::Delete, "/book/{id}", noop)
    }

    #[test]
    fn captures_path_params() {
        match router().lookup(Some(Method::Put), "/book/42") {
            Lookup::Found(_, params) => assert_eq!(params["id"], "42"),
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert!(matches!(router().lookup(Some(Method::Get), "/shelf"), Lookup::NotFound));
        assert!(matches!(router().lookup(Some(Method::Get), "/book/1/2"), Lookup::NotFound));
    }

    #[test]
    fn wrong_method_lists_allowed() {
        match router().lookup(Some(Method::Post), "/book/1") {
            Lookup::MethodNotAllowed(allowed) => {
                assert_eq!(allowed, [Method::Delete, Method::Get, Method::Put]);
            }
            _ => panic!("expected 405"),
        }
        assert!(matches!(router().lookup(None, "/book"), Lookup::MethodNotAllowed(_)));
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_route_panics() {
        let _ = Router::new()
            .on(Method::Get, "/book/{id}", noop)
            .on(Method::Get, "/book/{key}", noop);
    }
}
