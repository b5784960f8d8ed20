//! Fixed Table Schema
//!
//! Describes the column layout of the engine-side table. The schema is
//! created once per binding lifetime and never changes afterwards; every
//! appended row conforms to it by construction
//! ([`SchemaRow`](crate::domain::quote::SchemaRow) is the only row type
//! the sink port accepts).

use serde::{Deserialize, Serialize};

// =============================================================================
// Column Types
// =============================================================================

/// Engine-side column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 string column.
    #[serde(rename = "string")]
    Str,
    /// Floating-point numeric column.
    Float,
    /// Date-time column.
    Date,
}

impl ColumnType {
    /// Get the engine-facing type name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Float => "float",
            Self::Date => "date",
        }
    }
}

/// A single named column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column type.
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column.
    #[must_use]
    pub fn new(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            column_type,
        }
    }
}

// =============================================================================
// Table Schema
// =============================================================================

/// Ordered column layout for an engine-side table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    /// Create a schema from an ordered column list.
    #[must_use]
    pub const fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The fixed four-column schema backing the quote graph:
    /// `stock: string, top_ask_price: float, top_bid_price: float,
    /// timestamp: date`.
    #[must_use]
    pub fn quote_graph() -> Self {
        Self::new(vec![
            Column::new("stock", ColumnType::Str),
            Column::new("top_ask_price", ColumnType::Float),
            Column::new("top_bid_price", ColumnType::Float),
            Column::new("timestamp", ColumnType::Date),
        ])
    }

    /// Ordered columns.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column type by name.
    #[must_use]
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.column_type)
    }
}

// =============================================================================
// Tests
// =============================================================================
