//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport. Any startup failure is logged and turned into a
//! non-zero exit status.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use tiingo_mcp_server::core::{Config, LoggingConfig, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if let Err(e) = run(config).await {
        error!("MCP server stopped: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

async fn run(config: Config) -> tiingo_mcp_server::Result<()> {
    let transport = TransportService::new(config.transport.clone());

    let server = McpServer::new(config)?;
    info!("Server initialized");

    transport.run(server).await?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Writes to stderr; `RUST_LOG` directives are honoured on top of the
/// configured level.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
