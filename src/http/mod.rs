//! HTTP inspection API.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout)
//!     → handlers.rs
//!         /status    name, version, route count
//!         /routes    the route table
//!         /resolve   resolution only, nothing is loaded
//!         /navigate  resolution plus loaded view modules
//!     → JSON response
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
