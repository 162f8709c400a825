// Server module entry point
// Listener construction, per-connection serving, and the accept loop

pub mod connection;
pub mod listener;

// `loop` is a keyword and cannot name a module, so the file is mounted as server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_listener;
pub use server_loop::start_server_loop;
