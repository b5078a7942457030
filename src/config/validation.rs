//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Check declared routes against the registry and table invariants
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::AppConfig;
use crate::routing::{RouteError, RouteTable};
use crate::view::ModuleRegistry;

/// A semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address `{address}`")]
    InvalidBindAddress { address: String },

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("invalid log level `{level}`")]
    InvalidLogLevel { level: String },

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Validate `config`, resolving declared components in `registry`.
pub fn validate_config(
    config: &AppConfig,
    registry: &ModuleRegistry,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            address: config.listener.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if LevelFilter::from_str(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel {
            level: config.observability.log_level.clone(),
        });
    }

    if !config.routes.is_empty() {
        if let Err(table_error) = RouteTable::from_config(&config.routes, registry) {
            errors.extend(table_error.errors.into_iter().map(ValidationError::Route));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
