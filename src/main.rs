//! Route table CLI entry point.

use clap::Parser;
use tokio::net::TcpListener;

use route_table::cli::{report, Cli};
use route_table::lifecycle::{shutdown_signal, start};
use route_table::{HttpServer, ModuleRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = ModuleRegistry::bundled();

    // Any startup error exits non-zero, which is what `check` relies on.
    let (config, router) = start(cli.config.as_deref(), &registry)?;

    if let Some(output) = report(&cli.command, &router)? {
        println!("{output}");
        return Ok(());
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    HttpServer::new(config, router)
        .run(listener, shutdown_signal())
        .await?;
    tracing::info!("Shutdown complete");

    Ok(())
}
