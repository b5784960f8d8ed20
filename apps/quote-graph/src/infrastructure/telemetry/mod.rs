//! Tracing Subscriber Initialization
//!
//! Structured logging for the quote graph host.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter directives (default: `quote_graph=info`)
//!
//! # Usage
//!
//! ```ignore
//! use quote_graph::infrastructure::telemetry;
//!
//! // Initialize once at startup
//! telemetry::init();
//! tracing::info!("ready");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber with an env filter and fmt layer.
///
/// Call once at startup; a second call panics by design of the global
/// subscriber registry.
#[allow(clippy::expect_used)]
pub fn init() {
    let env_filter = EnvFilter::from_default_env().add_directive(
        "quote_graph=info"
            .parse()
            .expect("static directive 'quote_graph=info' is valid"),
    );

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
