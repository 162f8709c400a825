//! HTTP building blocks
//!
//! Response construction helpers shared by the handlers and the router.

pub mod response;

pub use response::{build_404_response, build_error_response, build_text_response};
