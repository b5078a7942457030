//! Route table for the strategy console single-page application.
//!
//! The table maps URL paths to lazily-loaded views, nests the default layout
//! around them and ends with a catch-all 404 route. A reference resolver, a
//! CLI and a small HTTP API make the table inspectable.

pub mod app;
pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod view;

pub use config::AppConfig;
pub use http::HttpServer;
pub use routing::{Route, RouteMatch, RouteTable, Router};
pub use view::{ComponentRef, ModuleRegistry, ViewModule};
