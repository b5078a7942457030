//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Table Construction (at startup):
//!     Route declarations (literal or RouteConfig[])
//!     → route.rs (compile path patterns)
//!     → validation.rs (table invariants)
//!     → Freeze as immutable RouteTable
//!
//! Incoming Path:
//!     → router.rs (ordered lookup, recurse into children)
//!     → matcher.rs (segment matching, parameter capture)
//!     → Return: matched route chain (wildcard when nothing else matches)
//! ```
//!
//! # Design Decisions
//! - Tables are built once and never mutated
//! - First match wins, in declaration order
//! - Deterministic: the same path always resolves to the same chain
//! - The trailing wildcard makes "no match" unrepresentable

pub mod matcher;
pub mod route;
pub mod router;
pub mod validation;

pub use matcher::{PathPattern, PatternError, Segment, PATH_MATCH_PARAM, WILDCARD};
pub use route::{Route, RouteTable, TableError};
pub use router::{Navigation, Props, Resolution, ResolvedView, RouteMatch, Router};
pub use validation::RouteError;
