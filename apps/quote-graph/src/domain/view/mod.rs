//! Declarative View Configuration
//!
//! The five display attributes attached to the rendering surface exactly
//! once, immediately after the sink is created: view kind, column pivot,
//! row pivot, visible columns, and per-column aggregation rules. The
//! configuration is fixed for the binding's lifetime; the engine performs
//! all grouping and aggregation it describes.

use std::collections::BTreeMap;

// =============================================================================
// View Kind and Aggregates
// =============================================================================

/// How the surface renders the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// Continuous line graph over the row pivot.
    #[default]
    ContinuousLine,
}

impl ViewKind {
    /// Get the surface-facing attribute value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContinuousLine => "y_line",
        }
    }
}

/// Per-column policy for collapsing rows that share the same pivot keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Average of all values.
    Avg,
    /// Count of distinct values.
    DistinctCount,
}

impl Aggregate {
    /// Get the surface-facing attribute value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::DistinctCount => "distinct count",
        }
    }
}

// =============================================================================
// View Configuration
// =============================================================================

/// Attribute names understood by the rendering surface.
pub mod attribute {
    /// View kind attribute.
    pub const VIEW: &str = "view";
    /// Column pivot attribute (JSON list of column names).
    pub const COLUMN_PIVOTS: &str = "column-pivots";
    /// Row pivot attribute (JSON list of column names).
    pub const ROW_PIVOTS: &str = "row-pivots";
    /// Visible columns attribute (JSON list of column names).
    pub const COLUMNS: &str = "columns";
    /// Aggregation rules attribute (JSON map of column name to rule).
    pub const AGGREGATES: &str = "aggregates";
}

/// Complete declarative configuration for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// View kind.
    pub kind: ViewKind,
    /// Columns the engine groups into separate series.
    pub column_pivots: Vec<String>,
    /// Columns the engine groups along the x axis.
    pub row_pivots: Vec<String>,
    /// Columns rendered as the visible measure.
    pub columns: Vec<String>,
    /// Aggregation rule per column. Ordered so the rendered attribute
    /// value is deterministic.
    pub aggregates: BTreeMap<String, Aggregate>,
}

impl ViewConfig {
    /// The quote graph's fixed configuration: one line per stock over
    /// time, showing the average top ask price. Duplicate rows sharing a
    /// (stock, timestamp) pivot key are averaged away by the engine
    /// rather than deduplicated by the binding.
    #[must_use]
    pub fn quote_graph() -> Self {
        let aggregates = [
            ("stock", Aggregate::DistinctCount),
            ("top_ask_price", Aggregate::Avg),
            ("top_bid_price", Aggregate::Avg),
            ("timestamp", Aggregate::DistinctCount),
        ]
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect();

        Self {
            kind: ViewKind::ContinuousLine,
            column_pivots: vec!["stock".to_string()],
            row_pivots: vec!["timestamp".to_string()],
            columns: vec!["top_ask_price".to_string()],
            aggregates,
        }
    }

    /// Render the five `(name, value)` attribute pairs in the order they
    /// are applied to the surface. List and map values are JSON-encoded.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let aggregates: BTreeMap<&str, &str> = self
            .aggregates
            .iter()
            .map(|(name, rule)| (name.as_str(), rule.as_str()))
            .collect();

        vec![
            (attribute::VIEW, self.kind.as_str().to_string()),
            (attribute::COLUMN_PIVOTS, json_list(&self.column_pivots)),
            (attribute::ROW_PIVOTS, json_list(&self.row_pivots)),
            (attribute::COLUMNS, json_list(&self.columns)),
            (
                attribute::AGGREGATES,
                serde_json::to_string(&aggregates).unwrap_or_default(),
            ),
        ]
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::quote_graph()
    }
}

fn json_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_graph_attributes_in_order() {
        let attributes = ViewConfig::quote_graph().attributes();

        assert_eq!(attributes.len(), 5);
        assert_eq!(attributes[0], (attribute::VIEW, "y_line".to_string()));
        assert_eq!(
            attributes[1],
            (attribute::COLUMN_PIVOTS, r#"["stock"]"#.to_string())
        );
        assert_eq!(
            attributes[2],
            (attribute::ROW_PIVOTS, r#"["timestamp"]"#.to_string())
        );
        assert_eq!(
            attributes[3],
            (attribute::COLUMNS, r#"["top_ask_price"]"#.to_string())
        );
    }

    #[test]
    fn aggregates_rendered_as_json_map() {
        let attributes = ViewConfig::quote_graph().attributes();
        let (name, value) = &attributes[4];

        assert_eq!(*name, attribute::AGGREGATES);
        let parsed: std::collections::BTreeMap<String, String> =
            serde_json::from_str(value).unwrap();
        assert_eq!(parsed["stock"], "distinct count");
        assert_eq!(parsed["top_ask_price"], "avg");
        assert_eq!(parsed["top_bid_price"], "avg");
        assert_eq!(parsed["timestamp"], "distinct count");
    }

    #[test]
    fn aggregate_names() {
        assert_eq!(Aggregate::Avg.as_str(), "avg");
        assert_eq!(Aggregate::DistinctCount.as_str(), "distinct count");
    }
}
