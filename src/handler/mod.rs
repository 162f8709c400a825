//! Request handler module
//!
//! The three demonstration handlers. Each maps one inbound request to one
//! plain-text response and emits one log record; none of them reads headers,
//! query parameters, or the request body.

pub mod router;

pub use router::{HandlerFn, RequestContext, Router};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http;
use crate::logger::Logger;

/// Greets the caller.
pub fn hello_handler(_ctx: &RequestContext<'_>, logger: &Logger) -> Response<Full<Bytes>> {
    logger.info("helloHandler called");
    http::build_text_response("Hello, World!")
}

/// Demonstrates an info-level log.
pub fn info_handler(_ctx: &RequestContext<'_>, logger: &Logger) -> Response<Full<Bytes>> {
    logger.info("infoHandler called");
    http::build_text_response("This is an info message!")
}

/// Demonstrates an error-level log alongside a 500 response.
pub fn error_handler(_ctx: &RequestContext<'_>, logger: &Logger) -> Response<Full<Bytes>> {
    logger.error("errorHandler called");
    http::build_error_response(StatusCode::INTERNAL_SERVER_ERROR, "This is an error message!")
}
