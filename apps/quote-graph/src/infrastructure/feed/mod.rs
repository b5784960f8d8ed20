//! Simulated Quote Feed
//!
//! A [`QuoteFeed`] adapter that stands in for the upstream data-streaming
//! collaborator. Every tick it emits one quote per configured symbol with
//! randomized prices, occasionally omitting the ask or bid side so the
//! zero-default normalization path is exercised end to end.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tokio::time::Interval;

use crate::application::ports::QuoteFeed;
use crate::domain::quote::{PriceLevel, QuoteRecord};
use crate::infrastructure::config::FeedSettings;

/// Randomized in-process quote source.
pub struct SimulatedFeed {
    symbols: Vec<String>,
    interval: Interval,
    missing_side_probability: f64,
    remaining: Option<u64>,
    rng: StdRng,
}

impl SimulatedFeed {
    /// Create a feed from settings, seeded from the OS.
    #[must_use]
    pub fn new(settings: &FeedSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Create a feed with an explicit RNG, for deterministic tests.
    #[must_use]
    pub fn with_rng(settings: &FeedSettings, rng: StdRng) -> Self {
        Self {
            symbols: settings.symbols.clone(),
            interval: tokio::time::interval(settings.tick_interval),
            missing_side_probability: settings.missing_side_probability,
            remaining: (settings.max_batches > 0).then_some(settings.max_batches),
            rng,
        }
    }
}

#[async_trait]
impl QuoteFeed for SimulatedFeed {
    async fn next_batch(&mut self) -> Option<Vec<QuoteRecord>> {
        if let Some(remaining) = &mut self.remaining {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        self.interval.tick().await;

        let timestamp = Utc::now();
        let mut batch = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            batch.push(simulate_quote(
                &mut self.rng,
                symbol,
                self.missing_side_probability,
                timestamp,
            ));
        }

        tracing::trace!(quotes = batch.len(), "simulated batch emitted");
        Some(batch)
    }
}

fn simulate_quote(
    rng: &mut StdRng,
    symbol: &str,
    missing_side_probability: f64,
    timestamp: DateTime<Utc>,
) -> QuoteRecord {
    let bid_cents = rng.random_range(9_000..11_000_i64);
    let spread_cents = rng.random_range(1..20_i64);

    let top_bid = PriceLevel {
        price: Decimal::new(bid_cents, 2),
        size: rng.random_range(1..100),
    };
    let top_ask = PriceLevel {
        price: Decimal::new(bid_cents + spread_cents, 2),
        size: rng.random_range(1..100),
    };

    QuoteRecord {
        stock: symbol.to_string(),
        top_ask: (!rng.random_bool(missing_side_probability)).then_some(top_ask),
        top_bid: (!rng.random_bool(missing_side_probability)).then_some(top_bid),
        timestamp,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn fast_settings(max_batches: u64) -> FeedSettings {
        FeedSettings {
            tick_interval: Duration::from_millis(1),
            max_batches,
            ..FeedSettings::default()
        }
    }

    #[tokio::test]
    async fn emits_one_quote_per_symbol_in_order() {
        let settings = fast_settings(1);
        let mut feed = SimulatedFeed::with_rng(&settings, StdRng::seed_from_u64(42));

        let batch = feed.next_batch().await.unwrap();
        let stocks: Vec<&str> = batch.iter().map(|q| q.stock.as_str()).collect();

        assert_eq!(stocks, vec!["AAPL", "GOOG", "MSFT"]);
    }

    #[tokio::test]
    async fn stream_ends_after_max_batches() {
        let settings = fast_settings(2);
        let mut feed = SimulatedFeed::with_rng(&settings, StdRng::seed_from_u64(7));

        assert!(feed.next_batch().await.is_some());
        assert!(feed.next_batch().await.is_some());
        assert!(feed.next_batch().await.is_none());
        assert!(feed.next_batch().await.is_none());
    }

    #[tokio::test]
    async fn ask_never_below_bid_when_both_present() {
        let settings = FeedSettings {
            missing_side_probability: 0.0,
            ..fast_settings(5)
        };
        let mut feed = SimulatedFeed::with_rng(&settings, StdRng::seed_from_u64(1));

        while let Some(batch) = feed.next_batch().await {
            for quote in batch {
                let ask = quote.top_ask.unwrap();
                let bid = quote.top_bid.unwrap();
                assert!(ask.price > bid.price);
            }
        }
    }

    #[tokio::test]
    async fn sides_are_omitted_when_probability_is_one() {
        let settings = FeedSettings {
            missing_side_probability: 1.0,
            ..fast_settings(1)
        };
        let mut feed = SimulatedFeed::with_rng(&settings, StdRng::seed_from_u64(3));

        let batch = feed.next_batch().await.unwrap();
        assert!(batch.iter().all(|q| q.top_ask.is_none() && q.top_bid.is_none()));
    }
}
