//! Host Configuration Settings
//!
//! Configuration types for the quote graph host, loaded from environment
//! variables. The view configuration itself is fixed for the binding's
//! lifetime and is not configurable here.

use std::time::Duration;

/// Simulated feed settings.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// Symbols to quote each tick.
    pub symbols: Vec<String>,
    /// Delay between batch deliveries.
    pub tick_interval: Duration,
    /// Stop after this many batches (0 = run until shutdown).
    pub max_batches: u64,
    /// Probability that one side of a quote is omitted, exercising the
    /// zero-default normalization path.
    pub missing_side_probability: f64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            symbols: vec!["AAPL".to_string(), "GOOG".to_string(), "MSFT".to_string()],
            tick_interval: Duration::from_millis(500),
            max_batches: 0, // Unlimited
            missing_side_probability: 0.1,
        }
    }
}

/// Complete host configuration.
#[derive(Debug, Clone, Default)]
pub struct GraphAppConfig {
    /// Simulated feed settings.
    pub feed: FeedSettings,
}

impl GraphAppConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value is present but unusable
    /// (for example an empty symbol list).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = FeedSettings::default();

        let symbols = match std::env::var("QUOTE_GRAPH_SYMBOLS") {
            Ok(raw) => {
                let symbols: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_uppercase)
                    .collect();
                if symbols.is_empty() {
                    return Err(ConfigError::EmptyValue("QUOTE_GRAPH_SYMBOLS".to_string()));
                }
                symbols
            }
            Err(_) => defaults.symbols,
        };

        let feed = FeedSettings {
            symbols,
            tick_interval: parse_env_duration_millis(
                "QUOTE_GRAPH_TICK_INTERVAL_MS",
                defaults.tick_interval,
            ),
            max_batches: parse_env_u64("QUOTE_GRAPH_MAX_BATCHES", defaults.max_batches),
            missing_side_probability: parse_env_f64(
                "QUOTE_GRAPH_MISSING_SIDE_PROBABILITY",
                defaults.missing_side_probability,
            )
            .clamp(0.0, 1.0),
        };

        Ok(Self { feed })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable has an unusable empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_duration_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_settings_defaults() {
        let settings = FeedSettings::default();
        assert_eq!(settings.symbols, vec!["AAPL", "GOOG", "MSFT"]);
        assert_eq!(settings.tick_interval, Duration::from_millis(500));
        assert_eq!(settings.max_batches, 0);
        assert!((settings.missing_side_probability - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_helpers_fall_back_to_defaults() {
        assert_eq!(parse_env_u64("QUOTE_GRAPH_TEST_UNSET_U64", 7), 7);
        assert!((parse_env_f64("QUOTE_GRAPH_TEST_UNSET_F64", 0.25) - 0.25).abs() < f64::EPSILON);
        assert_eq!(
            parse_env_duration_millis("QUOTE_GRAPH_TEST_UNSET_MS", Duration::from_millis(250)),
            Duration::from_millis(250)
        );
    }
}
