//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the configuration, then install logging from it
//! - Choose the route source (declared in config, or the built-in table)
//! - Build and validate the route table
//! - Hand the frozen table to the router

use std::path::Path;

use thiserror::Error;

use crate::app;
use crate::config::{load_config, AppConfig, ConfigError};
use crate::observability::init_logging;
use crate::routing::{RouteTable, Router, TableError};
use crate::view::ModuleRegistry;

/// Error that stops the process before it does any work.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Run startup in order: config, logging, route table.
///
/// Without `config_path` the defaults and the built-in table are used.
pub fn start(
    config_path: Option<&Path>,
    registry: &ModuleRegistry,
) -> Result<(AppConfig, Router), StartupError> {
    let config = match config_path {
        Some(path) => load_config(path, registry)?,
        None => AppConfig::default(),
    };
    init_logging(&config.observability);

    tracing::info!(
        source = %config_path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string()),
        bind_address = %config.listener.bind_address,
        log_level = %config.observability.log_level,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let router = build_router(&config, registry)?;
    Ok((config, router))
}

/// Build the router for `config`.
///
/// Routes declared in the config replace the built-in application table;
/// their components are resolved in `registry`.
pub fn build_router(config: &AppConfig, registry: &ModuleRegistry) -> Result<Router, TableError> {
    let (table, source) = if config.routes.is_empty() {
        (app::routes()?, "built-in")
    } else {
        (RouteTable::from_config(&config.routes, registry)?, "config")
    };

    tracing::info!(
        source,
        routes = table.flatten().len(),
        fallback = table.fallback().component().specifier(),
        "Route table constructed"
    );

    Ok(Router::new(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;

    #[test]
    fn test_builtin_table_by_default() {
        let router = build_router(&AppConfig::default(), &ModuleRegistry::bundled()).unwrap();
        assert_eq!(router.table(), &app::routes().unwrap());
    }

    #[test]
    fn test_config_routes_replace_builtin() {
        let mut config = AppConfig::default();
        config.routes = vec![
            RouteConfig {
                path: "/".into(),
                component: "pages/index".into(),
                props: false,
                children: Vec::new(),
            },
            RouteConfig {
                path: "*".into(),
                component: "pages/404".into(),
                props: false,
                children: Vec::new(),
            },
        ];

        let router = build_router(&config, &ModuleRegistry::bundled()).unwrap();
        assert_eq!(router.table().len(), 2);
        assert!(router.resolve("/build").is_fallback());
    }

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "route-table-{name}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_start_with_defaults() {
        let (config, router) = start(None, &ModuleRegistry::bundled()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(router.table(), &app::routes().unwrap());
    }

    #[test]
    fn test_start_from_file() {
        let path = write_config(
            "start",
            r#"
[listener]
bind_address = "127.0.0.1:9100"

[[routes]]
path = "/"
component = "pages/index"

[[routes]]
path = "*"
component = "pages/404"
"#,
        );

        let (config, router) = start(Some(&path), &ModuleRegistry::bundled()).unwrap();
        std::fs::remove_file(&path).unwrap_or_default();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9100");
        assert_eq!(router.table().len(), 2);
    }

    #[test]
    fn test_start_rejects_invalid_table() {
        let path = write_config(
            "invalid",
            r#"
[[routes]]
path = "/reports"
component = "pages/reports"
"#,
        );

        let err = start(Some(&path), &ModuleRegistry::bundled()).unwrap_err();
        std::fs::remove_file(&path).unwrap_or_default();

        assert!(matches!(err, StartupError::Config(ConfigError::Validation(_))));
        assert!(err.to_string().contains("pages/reports"));
    }

    #[test]
    fn test_start_missing_file() {
        let path = std::env::temp_dir().join("route-table-does-not-exist.toml");
        let err = start(Some(&path), &ModuleRegistry::bundled()).unwrap_err();
        assert!(matches!(err, StartupError::Config(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_config_routes_fail() {
        let mut config = AppConfig::default();
        config.routes = vec![RouteConfig {
            path: "/".into(),
            component: "pages/index".into(),
            props: false,
            children: Vec::new(),
        }];

        assert!(build_router(&config, &ModuleRegistry::bundled()).is_err());
    }
}
