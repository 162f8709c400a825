// Server loop module
// Accepts connections until the process terminates

use std::sync::Arc;

use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::handler::Router;
use crate::logger::Logger;

/// Accept loop: one spawned task per inbound connection.
///
/// Transient accept failures are logged and tolerated. The loop has no
/// shutdown path of its own; the process ends via the fatal path at startup
/// or external termination.
pub async fn start_server_loop(
    listener: TcpListener,
    router: Arc<Router>,
    logger: Arc<Logger>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, &router, &logger);
            }
            Err(e) => {
                logger.warn(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
