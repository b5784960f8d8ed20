//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementations of the port
//! interfaces defined in the application layer.

/// In-memory table engine adapter (also the test double).
pub mod engine;

/// Logging rendering-surface adapter.
pub mod surface;

/// Simulated upstream quote feed.
pub mod feed;

/// Configuration loading from the environment.
pub mod config;

/// Tracing subscriber initialization.
pub mod telemetry;
