//! View module subsystem.
//!
//! # Data Flow
//! ```text
//! Route declaration
//!     → component.rs (deferred ComponentRef, never invoked at construction)
//!     → registry.rs (specifier → ComponentRef, for config-declared tables)
//!
//! Navigation (host router):
//!     matched routes
//!     → cache.rs (one load per specifier, concurrent loads coalesce)
//!     → ViewModule handles
//! ```

pub mod cache;
pub mod component;
pub mod registry;

pub use cache::ModuleCache;
pub use component::{ComponentRef, LoadError, LoadFuture, ViewModule};
pub use registry::ModuleRegistry;
