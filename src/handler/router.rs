//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: exact-path route matching and
//! dispatch to the registered handler, with a stock 404 for everything else.

use std::collections::HashMap;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::http;
use crate::logger::Logger;

/// Request context encapsulating what a handler may inspect.
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
}

/// Handler contract: one request in, one response out, one log emission.
pub type HandlerFn = fn(&RequestContext<'_>, &Logger) -> Response<Full<Bytes>>;

/// Exact-path dispatch table.
///
/// Routes are registered during bootstrap and never change while serving,
/// so concurrent dispatch needs no locking.
#[derive(Default)]
pub struct Router {
    routes: HashMap<String, HandlerFn>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Associate a handler with an exact path.
    pub fn route(&mut self, path: &str, handler: HandlerFn) {
        self.routes.insert(path.to_string(), handler);
    }

    /// Dispatch a request by exact path equality. Every method matches;
    /// unknown paths get the stock 404 response.
    pub fn dispatch<B>(&self, req: &Request<B>, logger: &Logger) -> Response<Full<Bytes>> {
        let ctx = RequestContext {
            method: req.method(),
            path: req.uri().path(),
        };
        logger.debug(&format!("{} {}", ctx.method, ctx.path));
        match self.routes.get(ctx.path) {
            Some(handler) => handler(&ctx, logger),
            None => http::build_404_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use crate::handler;
    use http_body_util::BodyExt;

    fn test_logger() -> Logger {
        Logger::new(&LoggingConfig {
            level: "warn".to_string(),
            format: "json".to_string(),
            output: "stderr".to_string(),
        })
    }

    fn demo_router() -> Router {
        let mut router = Router::new();
        router.route("/", handler::hello_handler);
        router.route("/info", handler::info_handler);
        router.route("/error", handler::error_handler);
        router
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn root_greets_the_caller() {
        let router = demo_router();
        let req = Request::builder().uri("/").body(()).expect("request");
        let response = router.dispatch(&req, &test_logger());

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "Hello, World!");
    }

    #[tokio::test]
    async fn info_route_returns_info_message() {
        let router = demo_router();
        let req = Request::builder().uri("/info").body(()).expect("request");
        let response = router.dispatch(&req, &test_logger());

        assert_eq!(response.status(), 200);
        assert_eq!(body_string(response).await, "This is an info message!");
    }

    #[tokio::test]
    async fn error_route_returns_500_with_trailing_newline() {
        let router = demo_router();
        let req = Request::builder().uri("/error").body(()).expect("request");
        let response = router.dispatch(&req, &test_logger());

        assert_eq!(response.status(), 500);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "This is an error message!\n");
    }

    #[tokio::test]
    async fn unknown_path_yields_404() {
        let router = demo_router();
        let req = Request::builder()
            .uri("/missing")
            .body(())
            .expect("request");
        let response = router.dispatch(&req, &test_logger());

        assert_eq!(response.status(), 404);
        assert_eq!(body_string(response).await, "404 Not Found");
    }

    #[tokio::test]
    async fn concurrent_dispatch_does_not_cross_talk() {
        use std::sync::Arc;

        let router = Arc::new(demo_router());
        let logger = Arc::new(test_logger());

        let mut tasks = Vec::new();
        for path in ["/", "/info", "/error", "/", "/info", "/error"] {
            let router = Arc::clone(&router);
            let logger = Arc::clone(&logger);
            tasks.push(tokio::spawn(async move {
                let req = Request::builder().uri(path).body(()).expect("request");
                let response = router.dispatch(&req, &logger);
                (path, response.status().as_u16(), body_string(response).await)
            }));
        }

        for task in tasks {
            let (path, status, body) = task.await.expect("task joins");
            match path {
                "/" => {
                    assert_eq!(status, 200);
                    assert_eq!(body, "Hello, World!");
                }
                "/info" => {
                    assert_eq!(status, 200);
                    assert_eq!(body, "This is an info message!");
                }
                "/error" => {
                    assert_eq!(status, 500);
                    assert_eq!(body, "This is an error message!\n");
                }
                _ => unreachable!(),
            }
        }
    }

    #[tokio::test]
    async fn any_method_matches_a_registered_path() {
        let router = demo_router();
        for method in [Method::GET, Method::POST, Method::DELETE] {
            let req = Request::builder()
                .method(method)
                .uri("/")
                .body(())
                .expect("request");
            let response = router.dispatch(&req, &test_logger());
            assert_eq!(response.status(), 200);
        }
    }
}
