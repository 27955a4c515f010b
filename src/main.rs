//! Slow JSON server.
//!
//! Serves two canned JSON endpoints whose bodies are released at a fixed byte
//! rate, for testing how HTTP clients cope with slow responses.
//!
//! ```text
//!   GET /slow-json   200  body_len/20 bytes every 100ms
//!   GET /long-json   200  whole body after 69ms
//!   anything else    404  text/plain hint
//! ```

use clap::Parser;

use slow_json_server::config::{ServerConfig, DEFAULT_PORT};
use slow_json_server::lifecycle::{self, signals};
use slow_json_server::observability::logging;

#[derive(Parser)]
#[command(name = "slow-json-server")]
#[command(about = "Canned JSON endpoints with throttled response bodies", long_about = None)]
struct Cli {
    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ServerConfig::with_port(cli.port);

    logging::init(&config.observability);
    tracing::info!("slow-json-server v{} starting", env!("CARGO_PKG_VERSION"));

    let handle = match lifecycle::start(config).await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start server");
            return Err(e.into());
        }
    };

    let stop = signals::ShutdownSignal::register()?;
    println!("server started on port {}", handle.port());

    stop.recv().await?;
    handle.shutdown().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
