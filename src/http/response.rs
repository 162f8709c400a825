//! HTTP response building module
//!
//! Builders for the handful of response shapes the server produces,
//! decoupled from the handlers that use them.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build a 200 plain-text response.
pub fn build_text_response(body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from_static(body.as_bytes()))))
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("404 Not Found"))))
}

/// Reply to the request with the given error message and status code.
///
/// Mirrors the stock error helper: plain text, sniffing disabled, and a
/// trailing newline appended to the message.
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let mut body = message.to_string();
    body.push('\n');
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from(body))))
}
