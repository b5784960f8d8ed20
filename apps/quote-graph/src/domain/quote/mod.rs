//! Quote Records and Normalization
//!
//! Wire-shaped quote records as delivered by the upstream feed, and the
//! flat rows pushed into the table engine.
//!
//! Normalization is pure and total: a batch of N records always yields
//! exactly N rows in delivery order, and a missing ask or bid side maps
//! to a price of zero. The zero default is deliberate policy, not an
//! error path; the engine's per-column aggregation decides how such rows
//! show up in the rendered chart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Input Records
// =============================================================================

/// One side of the book top: best price and the size quoted at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Best quoted price.
    pub price: Decimal,
    /// Size available at that price.
    pub size: u32,
}

/// One observed market quote for a stock, as delivered by the feed.
///
/// Either side of the book may be absent when the feed had no quote for
/// it; records are immutable once received.
///
/// # Wire Format (JSON)
/// ```json
/// {
///   "stock": "AAPL",
///   "top_ask": {"price": 101.5, "size": 10},
///   "top_bid": null,
///   "timestamp": "2024-03-01T14:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Stock ticker symbol.
    pub stock: String,

    /// Best ask, if the feed carried one.
    #[serde(default)]
    pub top_ask: Option<PriceLevel>,

    /// Best bid, if the feed carried one.
    #[serde(default)]
    pub top_bid: Option<PriceLevel>,

    /// Observation time.
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Normalized Rows
// =============================================================================

/// A flat row conforming exactly to the fixed sink schema.
///
/// Field set and types never change; see
/// [`TableSchema::quote_graph`](crate::domain::schema::TableSchema::quote_graph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRow {
    /// Stock ticker symbol.
    pub stock: String,
    /// Best ask price, zero when the record carried no ask side.
    pub top_ask_price: Decimal,
    /// Best bid price, zero when the record carried no bid side.
    pub top_bid_price: Decimal,
    /// Observation time.
    pub timestamp: DateTime<Utc>,
}

/// Normalize one quote record into a schema row.
///
/// Pure and total: never fails. An absent ask or bid side defaults the
/// corresponding price to `Decimal::ZERO`.
#[must_use]
pub fn normalize(record: &QuoteRecord) -> SchemaRow {
    SchemaRow {
        stock: record.stock.clone(),
        top_ask_price: record.top_ask.map_or(Decimal::ZERO, |level| level.price),
        top_bid_price: record.top_bid.map_or(Decimal::ZERO, |level| level.price),
        timestamp: record.timestamp,
    }
}

/// Normalize a batch of quote records, preserving delivery order.
///
/// The output always has the same length as the input.
#[must_use]
pub fn normalize_batch(records: &[QuoteRecord]) -> Vec<SchemaRow> {
    records.iter().map(normalize).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    fn record(
        stock: &str,
        ask: Option<(&str, u32)>,
        bid: Option<(&str, u32)>,
        timestamp: DateTime<Utc>,
    ) -> QuoteRecord {
        QuoteRecord {
            stock: stock.to_string(),
            top_ask: ask.map(|(price, size)| PriceLevel {
                price: Decimal::from_str(price).unwrap(),
                size,
            }),
            top_bid: bid.map(|(price, size)| PriceLevel {
                price: Decimal::from_str(price).unwrap(),
                size,
            }),
            timestamp,
        }
    }

    #[test]
    fn both_sides_copied_verbatim() {
        let now = Utc::now();
        let row = normalize(&record("AAPL", Some(("101.50", 10)), Some(("101.45", 4)), now));

        assert_eq!(row.stock, "AAPL");
        assert_eq!(row.top_ask_price, Decimal::from_str("101.50").unwrap());
        assert_eq!(row.top_bid_price, Decimal::from_str("101.45").unwrap());
        assert_eq!(row.timestamp, now);
    }

    #[test_case(None, Some(("99.10", 5)) ; "missing ask defaults to zero")]
    #[test_case(Some(("99.20", 5)), None ; "missing bid defaults to zero")]
    #[test_case(None, None ; "missing both sides defaults both to zero")]
    fn missing_side_defaults_to_zero(ask: Option<(&str, u32)>, bid: Option<(&str, u32)>) {
        let row = normalize(&record("GOOG", ask, bid, Utc::now()));

        if ask.is_none() {
            assert_eq!(row.top_ask_price, Decimal::ZERO);
        } else {
            assert_ne!(row.top_ask_price, Decimal::ZERO);
        }
        if bid.is_none() {
            assert_eq!(row.top_bid_price, Decimal::ZERO);
        } else {
            assert_ne!(row.top_bid_price, Decimal::ZERO);
        }
    }

    #[test]
    fn batch_preserves_length_and_order() {
        let now = Utc::now();
        let records = vec![
            record("AAPL", Some(("1.00", 1)), None, now),
            record("MSFT", None, Some(("2.00", 2)), now),
            record("GOOG", Some(("3.00", 3)), Some(("2.90", 3)), now),
        ];

        let rows = normalize_batch(&records);

        assert_eq!(rows.len(), records.len());
        let stocks: Vec<&str> = rows.iter().map(|r| r.stock.as_str()).collect();
        assert_eq!(stocks, vec!["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn empty_batch_yields_empty_output() {
        assert!(normalize_batch(&[]).is_empty());
    }

    #[test]
    fn record_deserializes_with_absent_sides() {
        let json = r#"{
            "stock": "AAPL",
            "top_ask": {"price": "101.5", "size": 10},
            "timestamp": "2024-03-01T14:30:00Z"
        }"#;

        let record: QuoteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.stock, "AAPL");
        assert!(record.top_ask.is_some());
        assert!(record.top_bid.is_none());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn arb_level() -> impl Strategy<Value = Option<PriceLevel>> {
            proptest::option::of((0u64..1_000_000, 1u32..10_000).prop_map(|(cents, size)| {
                PriceLevel {
                    price: Decimal::new(i64::try_from(cents).unwrap_or(0), 2),
                    size,
                }
            }))
        }

        fn arb_record() -> impl Strategy<Value = QuoteRecord> {
            ("[A-Z]{1,5}", arb_level(), arb_level()).prop_map(|(stock, top_ask, top_bid)| {
                QuoteRecord {
                    stock,
                    top_ask,
                    top_bid,
                    timestamp: Utc::now(),
                }
            })
        }

        proptest! {
            #[test]
            fn batch_output_matches_input_pointwise(records in proptest::collection::vec(arb_record(), 0..64)) {
                let rows = normalize_batch(&records);
                prop_assert_eq!(rows.len(), records.len());

                for (record, row) in records.iter().zip(&rows) {
                    prop_assert_eq!(&row.stock, &record.stock);
                    prop_assert_eq!(row.timestamp, record.timestamp);
                    let expected_ask = record.top_ask.map_or(Decimal::ZERO, |l| l.price);
                    let expected_bid = record.top_bid.map_or(Decimal::ZERO, |l| l.price);
                    prop_assert_eq!(row.top_ask_price, expected_ask);
                    prop_assert_eq!(row.top_bid_price, expected_bid);
                }
            }
        }
    }
}
