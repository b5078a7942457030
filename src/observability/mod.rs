//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → logging.rs (subscriber: env filter + fmt layer)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - HTTP requests carry an `x-request-id` that appears in their spans

pub mod logging;

pub use logging::init_logging;
