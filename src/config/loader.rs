//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::view::ModuleRegistry;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path, registry: &ModuleRegistry) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, registry)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str, registry: &ModuleRegistry) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config, registry).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteError;

    const ROUTES: &str = r#"
[listener]
bind_address = "127.0.0.1:9000"

[observability]
log_level = "debug"

[[routes]]
path = "/"
component = "layouts/default"

  [[routes.children]]
  path = ""
  component = "pages/index"

  [[routes.children]]
  path = "monitor/:stratId"
  component = "pages/monitor"
  props = true

[[routes]]
path = "*"
component = "pages/404"
"#;

    #[test]
    fn test_parse_routes() {
        let config = parse_config(ROUTES, &ModuleRegistry::bundled()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].children.len(), 2);
        assert!(config.routes[0].children[1].props);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("", &ModuleRegistry::bundled()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[listener\n", &ModuleRegistry::bundled()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let content = r#"
[[routes]]
path = "*"
component = "pages/404"

[[routes]]
path = "/late"
component = "pages/index"
"#;
        let err = parse_config(content, &ModuleRegistry::bundled()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(
                errors,
                vec![ValidationError::Route(RouteError::WildcardNotLast {
                    position: 0
                })]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "route-table-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, ROUTES).unwrap();

        let config = load_config(&path, &ModuleRegistry::bundled()).unwrap();
        assert_eq!(config.routes[1].path, "*");

        std::fs::remove_file(&path).unwrap_or_default();
        assert!(matches!(
            load_config(&path, &ModuleRegistry::bundled()),
            Err(ConfigError::Io(_))
        ));
    }
}
