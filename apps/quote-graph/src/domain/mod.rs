//! Domain Layer - Quote records, normalization, and view configuration.
//!
//! This layer contains the core types for shaping streamed quotes into
//! the fixed tabular schema consumed by the table engine. All types here
//! are pure Rust with serialization support.

/// Quote records and schema-row normalization.
pub mod quote;

/// Fixed table schema description.
pub mod schema;

/// Declarative view configuration (pivots, aggregates, visible columns).
pub mod view;
