//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Init logging → Build route table → Freeze Router
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → resolve the shutdown future handed to the server
//! ```
//!
//! # Design Decisions
//! - Fail fast: an invalid table is a startup error, never a runtime one
//! - The table is built exactly once per process

pub mod signals;
pub mod startup;

pub use signals::shutdown_signal;
pub use startup::{build_router, start, StartupError};
