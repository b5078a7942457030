//! Command-line interface.
//!
//! ```text
//! route-table [--config FILE] show
//! route-table [--config FILE] resolve /monitor/abc123 /nowhere
//! route-table [--config FILE] check
//! route-table [--config FILE] serve
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::routing::{Resolution, Router};

#[derive(Debug, Parser)]
#[command(name = "route-table", version)]
#[command(about = "Inspect and serve the application route table", long_about = None)]
pub struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Print the route table as JSON
    Show,
    /// Resolve one or more paths and print the results as JSON
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Validate the configuration and route table
    Check,
    /// Serve the HTTP inspection API
    Serve,
}

/// Output of a one-shot command. `None` for `serve`, which runs until
/// shutdown instead.
pub fn report(command: &Commands, router: &Router) -> Result<Option<String>, serde_json::Error> {
    let output = match command {
        Commands::Show => serde_json::to_string_pretty(router.table())?,
        Commands::Resolve { paths } => {
            let resolutions: Vec<Resolution> = paths
                .iter()
                .map(|path| router.resolve(path).to_resolution())
                .collect();
            serde_json::to_string_pretty(&resolutions)?
        }
        Commands::Check => format!(
            "ok: {} routes, fallback `{}`",
            router.table().flatten().len(),
            router.table().fallback().component().specifier()
        ),
        Commands::Serve => return Ok(None),
    };
    Ok(Some(output))
}
