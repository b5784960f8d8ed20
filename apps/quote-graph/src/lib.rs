#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access
    )
)]

//! Quote Graph - Live Quote Chart Binding
//!
//! Shapes an ordered stream of stock quote records into a fixed tabular
//! schema and pushes the rows into an external visualization engine's
//! table. The engine owns all aggregation, pivoting, and drawing; this
//! crate owns the thin data-shaping contract in front of it.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Pure data shaping
//!   - `quote`: Quote records and schema-row normalization
//!   - `schema`: The fixed four-column table schema
//!   - `view`: The five declarative display attributes
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: Interfaces for the table engine, sink, surface, and feed
//!   - `binding`: The mount/update/unmount lifecycle state machine
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `engine`: In-memory table engine (and test double)
//!   - `surface`: Logging rendering-surface adapter
//!   - `feed`: Simulated upstream quote source
//!   - `config`: Environment-driven host configuration
//!   - `telemetry`: Tracing subscriber setup
//!
//! # Data Flow
//!
//! ```text
//! QuoteFeed ──batches──▶ GraphBinding ──rows──▶ TableSink (engine-owned)
//!                            │
//!                            └─once──▶ ViewSurface (attach + 5 attributes)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Pure quote shaping types with no engine dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::quote::{PriceLevel, QuoteRecord, SchemaRow, normalize, normalize_batch};
pub use domain::schema::{Column, ColumnType, TableSchema};
pub use domain::view::{Aggregate, ViewConfig, ViewKind};

// Ports
pub use application::ports::{EngineError, QuoteFeed, TableEngine, TableSink, ViewSurface};

// Binding
pub use application::binding::{GraphBinding, LifecycleStage};

// Infrastructure adapters (for integration tests and the host binary)
pub use infrastructure::config::{ConfigError, FeedSettings, GraphAppConfig};
pub use infrastructure::engine::{MemoryTable, MemoryTableEngine};
pub use infrastructure::feed::SimulatedFeed;
pub use infrastructure::surface::LoggingSurface;
