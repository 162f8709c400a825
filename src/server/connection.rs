// Connection handling module
// Serves a single accepted TCP connection over HTTP/1.1

use std::convert::Infallible;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::handler::Router;
use crate::logger::Logger;

/// Accept a connection and serve it on its own task.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    router: &Arc<Router>,
    logger: &Arc<Logger>,
) {
    logger.debug(&format!("Accepted connection from {peer_addr}"));
    handle_connection(stream, Arc::clone(router), Arc::clone(logger));
}

/// Serve one connection with the registered dispatch table.
///
/// Connection-level failures (resets, malformed requests) stay with this
/// task; they can never take the accept loop or the process down.
fn handle_connection(stream: tokio::net::TcpStream, router: Arc<Router>, logger: Arc<Logger>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let svc_router = Arc::clone(&router);
        let svc_logger = Arc::clone(&logger);
        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let router = Arc::clone(&svc_router);
                let logger = Arc::clone(&svc_logger);
                async move { Ok::<_, Infallible>(router.dispatch(&req, &logger)) }
            }),
        );

        if let Err(err) = conn.await {
            logger.debug(&format!("Failed to serve connection: {err:?}"));
        }
    });
}
