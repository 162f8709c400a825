use std::sync::Arc;

use serde_json::json;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let logger = Arc::new(logger::Logger::new(&cfg.logging));

    // Info sits below the configured warn threshold, so this annotation is
    // dropped under the startup configuration.
    logger.info_with_fields(
        "A group of walrus emerges from the ocean",
        &[("animal", json!("walrus")), ("size", json!(10))],
    );

    let mut router = handler::Router::new();
    router.route("/", handler::hello_handler);
    router.route("/info", handler::info_handler);
    router.route("/error", handler::error_handler);
    let router = Arc::new(router);

    let addr = cfg.get_socket_addr()?;
    let listener = match server::create_listener(addr) {
        Ok(listener) => listener,
        Err(e) => logger.fatal(&format!("Server failed to start: {e}")),
    };

    println!("Server is running on http://localhost:{}", cfg.server.port);

    if let Err(e) = server::start_server_loop(listener, router, Arc::clone(&logger)).await {
        logger.fatal(&format!("Server failed: {e}"));
    }

    Ok(())
}
