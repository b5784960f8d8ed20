//! Configuration Loading
//!
//! Environment-driven configuration for the demo host.

mod settings;

pub use settings::{ConfigError, FeedSettings, GraphAppConfig};
