//! Port Interfaces
//!
//! Defines the interfaces (ports) for external systems following
//! the Hexagonal Architecture pattern. These are the contracts that
//! infrastructure adapters must implement.
//!
//! ## Driven Ports (Outbound)
//!
//! - [`TableEngine`]: creates engine-owned tables from a fixed schema
//! - [`TableSink`]: the append-only handle to one engine-owned table
//! - [`ViewSurface`]: the rendering surface's attach/attribute interface
//!
//! ## Driver Ports (Inbound)
//!
//! - [`QuoteFeed`]: the ordered stream of quote record batches
//!
//! The engine owns everything past the sink: deduplication, pivoting,
//! aggregation, and redraw scheduling. As far as the binding is
//! concerned, appends are fire-and-forget.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::quote::{QuoteRecord, SchemaRow};
use crate::domain::schema::TableSchema;

// =============================================================================
// Errors
// =============================================================================

/// Table engine failure at sink creation.
///
/// The only anomaly class the binding observes; it degrades to a no-op
/// chart rather than failing.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine facility is not available in this environment.
    #[error("table engine unavailable")]
    Unavailable,
    /// The engine rejected the requested schema.
    #[error("table engine rejected schema: {0}")]
    SchemaRejected(String),
}

// =============================================================================
// Driven Ports
// =============================================================================

/// Factory for engine-owned tables.
#[cfg_attr(test, mockall::automock)]
pub trait TableEngine: Send + Sync {
    /// Create a new table with the given fixed schema.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Unavailable`] when no engine facility
    /// exists, or [`EngineError::SchemaRejected`] when the schema is not
    /// acceptable to the engine.
    fn create_table(&self, schema: &TableSchema) -> Result<Arc<dyn TableSink>, EngineError>;
}

/// Append-only handle to one engine-owned table.
///
/// Shared between the binding (writer) and the surface (reader); adapters
/// use interior mutability. Appends are additive and fire-and-forget: the
/// engine batches, aggregates, and redraws on its own schedule.
#[cfg_attr(test, mockall::automock)]
pub trait TableSink: Send + Sync {
    /// Append rows to the table. Never replaces existing rows.
    fn append(&self, rows: Vec<SchemaRow>);

    /// Number of rows currently held by the table.
    fn row_count(&self) -> usize;
}

/// The rendering surface the chart is drawn on.
#[cfg_attr(test, mockall::automock)]
pub trait ViewSurface: Send {
    /// Attach a table to the surface. Called exactly once per binding.
    fn attach(&mut self, sink: Arc<dyn TableSink>);

    /// Set one declarative display attribute.
    fn set_attribute(&mut self, name: &str, value: String);
}

// =============================================================================
// Driver Ports
// =============================================================================

/// Ordered stream of quote record batches from the upstream collaborator.
#[async_trait]
pub trait QuoteFeed: Send {
    /// Wait for and return the next batch, or `None` when the stream has
    /// ended. Batches are delivered in order; the feed never reorders or
    /// coalesces.
    async fn next_batch(&mut self) -> Option<Vec<QuoteRecord>>;
}
