//! Application Layer - Use cases and port definitions.
//!
//! This layer contains the graph binding use case and the port
//! interfaces that define how it interacts with the external
//! visualization engine and the upstream quote feed.

/// Port interfaces for external systems (table engine, surface, feed).
pub mod ports;

/// The graph binding lifecycle and update logic.
pub mod binding;
