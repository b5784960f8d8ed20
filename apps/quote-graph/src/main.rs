//! Quote Graph Binary
//!
//! Runs the live quote graph against the in-memory table engine, fed by
//! the simulated quote stream.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quote-graph
//! ```
//!
//! # Environment Variables
//!
//! - `QUOTE_GRAPH_SYMBOLS`: Comma-separated symbols (default: AAPL,GOOG,MSFT)
//! - `QUOTE_GRAPH_TICK_INTERVAL_MS`: Delay between batches (default: 500)
//! - `QUOTE_GRAPH_MAX_BATCHES`: Stop after N batches, 0 = unlimited (default: 0)
//! - `QUOTE_GRAPH_MISSING_SIDE_PROBABILITY`: Chance a quote side is absent (default: 0.1)
//! - `RUST_LOG`: Log level (default: info)

use quote_graph::infrastructure::telemetry;
use quote_graph::{
    GraphAppConfig, GraphBinding, LoggingSurface, MemoryTableEngine, QuoteFeed, SimulatedFeed,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    telemetry::init();

    tracing::info!("Starting quote graph");

    let config = GraphAppConfig::from_env()?;
    log_config(&config);

    let shutdown_token = CancellationToken::new();

    let engine = MemoryTableEngine::new();
    let mut surface = LoggingSurface::new();
    let mut binding = GraphBinding::quote_graph();

    // One-time setup: create the sink and configure the surface.
    binding.mount(&engine, &mut surface);

    let mut feed = SimulatedFeed::new(&config.feed);

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        await_shutdown(signal_token).await;
    });

    loop {
        tokio::select! {
            () = shutdown_token.cancelled() => break,
            batch = feed.next_batch() => {
                match batch {
                    Some(batch) => binding.on_data(&batch),
                    None => {
                        tracing::info!("quote feed ended");
                        break;
                    }
                }
            }
        }
    }

    binding.unmount();

    tracing::info!(
        batches = binding.batches_delivered(),
        "Quote graph stopped"
    );
    Ok(())
}

/// Log the parsed configuration.
fn log_config(config: &GraphAppConfig) {
    tracing::info!(
        symbols = config.feed.symbols.join(",").as_str(),
        tick_interval_ms = u64::try_from(config.feed.tick_interval.as_millis()).unwrap_or(u64::MAX),
        max_batches = config.feed.max_batches,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT), then cancel the token.
#[allow(clippy::expect_used)]
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown_token.cancel();
}
