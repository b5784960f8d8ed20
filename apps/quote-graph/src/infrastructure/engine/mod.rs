//! In-Memory Table Engine
//!
//! A [`TableEngine`] adapter backed by an in-memory row log. Serves two
//! roles: the default engine for the demo host, and the substitutable
//! test double the binding tests verify against. It stores rows exactly
//! as appended; aggregation, pivoting, and rendering stay out of scope.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::application::ports::{EngineError, TableEngine, TableSink};
use crate::domain::quote::SchemaRow;
use crate::domain::schema::TableSchema;

// =============================================================================
// Memory Table
// =============================================================================

/// One engine-owned table: a fixed schema plus an append-only row log.
pub struct MemoryTable {
    schema: TableSchema,
    rows: RwLock<Vec<SchemaRow>>,
    append_calls: AtomicU64,
}

impl MemoryTable {
    fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            rows: RwLock::new(Vec::new()),
            append_calls: AtomicU64::new(0),
        }
    }

    /// The schema the table was created with. Never changes.
    #[must_use]
    pub const fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Snapshot of all rows in append order.
    #[must_use]
    pub fn rows(&self) -> Vec<SchemaRow> {
        self.rows.read().clone()
    }

    /// Number of append calls received, including empty ones.
    #[must_use]
    pub fn append_calls(&self) -> u64 {
        self.append_calls.load(Ordering::Relaxed)
    }
}

impl TableSink for MemoryTable {
    fn append(&self, rows: Vec<SchemaRow>) {
        self.append_calls.fetch_add(1, Ordering::Relaxed);
        self.rows.write().extend(rows);
    }

    fn row_count(&self) -> usize {
        self.rows.read().len()
    }
}

// =============================================================================
// Memory Table Engine
// =============================================================================

/// Table engine adapter that keeps every created table in memory.
pub struct MemoryTableEngine {
    available: bool,
    tables: RwLock<Vec<Arc<MemoryTable>>>,
}

impl MemoryTableEngine {
    /// Create an available engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            tables: RwLock::new(Vec::new()),
        }
    }

    /// Create an engine whose `create_table` always fails, for
    /// exercising the degraded-mode path.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            tables: RwLock::new(Vec::new()),
        }
    }

    /// All tables created so far, in creation order.
    #[must_use]
    pub fn tables(&self) -> Vec<Arc<MemoryTable>> {
        self.tables.read().clone()
    }
}

impl Default for MemoryTableEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TableEngine for MemoryTableEngine {
    fn create_table(&self, schema: &TableSchema) -> Result<Arc<dyn TableSink>, EngineError> {
        if !self.available {
            return Err(EngineError::Unavailable);
        }

        let table = Arc::new(MemoryTable::new(schema.clone()));
        self.tables.write().push(Arc::clone(&table));
        tracing::debug!(columns = schema.columns().len(), "memory table created");
        Ok(table)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    fn make_row(stock: &str) -> SchemaRow {
        SchemaRow {
            stock: stock.to_string(),
            top_ask_price: Decimal::new(100, 0),
            top_bid_price: Decimal::new(99, 0),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn append_is_additive_and_ordered() {
        let engine = MemoryTableEngine::new();
        let sink = engine.create_table(&TableSchema::quote_graph()).unwrap();

        sink.append(vec![make_row("AAPL"), make_row("MSFT")]);
        sink.append(vec![make_row("GOOG")]);

        let table = engine.tables().remove(0);
        assert_eq!(table.append_calls(), 2);
        let stocks: Vec<String> = table.rows().into_iter().map(|r| r.stock).collect();
        assert_eq!(stocks, vec!["AAPL", "MSFT", "GOOG"]);
        assert_eq!(sink.row_count(), 3);
    }

    #[test]
    fn schema_is_preserved_verbatim() {
        let engine = MemoryTableEngine::new();
        let schema = TableSchema::quote_graph();
        let _sink = engine.create_table(&schema).unwrap();

        assert_eq!(*engine.tables().remove(0).schema(), schema);
    }

    #[test]
    fn unavailable_engine_refuses_table_creation() {
        let engine = MemoryTableEngine::unavailable();
        let result = engine.create_table(&TableSchema::quote_graph());

        assert!(matches!(result, Err(EngineError::Unavailable)));
        assert!(engine.tables().is_empty());
    }
}
