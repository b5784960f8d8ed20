//! Graph Binding
//!
//! Bridges the quote normalizer to the external rendering surface and
//! owns the one-time setup of that surface.
//!
//! # Lifecycle
//!
//! ```text
//! Unmounted -> SinkCreated -> Configured -> (update self-loop)
//!           \                            \
//!            -> Degraded                  -> Disposed
//! ```
//!
//! The lifecycle is an explicit state machine rather than an implicit
//! first-call flag. `SinkCreated` is the transient stage between table
//! creation and surface configuration; both happen inside a single
//! `mount` call. There are no backward transitions.
//!
//! # Failure semantics
//!
//! The binding itself never fails. An unavailable engine at mount is
//! logged once at warn level and the binding enters `Degraded`, where
//! every update is a no-op. Malformed quote sides were already absorbed
//! by normalization's zero default.

use std::sync::Arc;

use crate::application::ports::{TableEngine, TableSink, ViewSurface};
use crate::domain::quote::{QuoteRecord, normalize_batch};
use crate::domain::schema::TableSchema;
use crate::domain::view::ViewConfig;

// =============================================================================
// Lifecycle
// =============================================================================

/// Observable lifecycle stage of a [`GraphBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    /// Constructed, not yet mounted.
    Unmounted,
    /// Sink created, surface not yet configured.
    SinkCreated,
    /// Configured and accepting updates.
    Configured,
    /// Engine was unavailable at mount; updates are no-ops.
    Degraded,
    /// Unmounted after use; sink released, updates are no-ops.
    Disposed,
}

enum BindingState {
    Unmounted,
    SinkCreated(Arc<dyn TableSink>),
    Configured(Arc<dyn TableSink>),
    Degraded,
    Disposed,
}

impl BindingState {
    const fn stage(&self) -> LifecycleStage {
        match self {
            Self::Unmounted => LifecycleStage::Unmounted,
            Self::SinkCreated(_) => LifecycleStage::SinkCreated,
            Self::Configured(_) => LifecycleStage::Configured,
            Self::Degraded => LifecycleStage::Degraded,
            Self::Disposed => LifecycleStage::Disposed,
        }
    }
}

// =============================================================================
// Graph Binding
// =============================================================================

/// Owns one engine-side table and the configuration of one surface.
///
/// Constructed by the host, mounted once, then fed quote batches for the
/// rest of its lifetime. The binding is the sole writer to its sink.
pub struct GraphBinding {
    schema: TableSchema,
    view: ViewConfig,
    state: BindingState,
    batches_delivered: u64,
}

impl GraphBinding {
    /// Create a binding with an explicit schema and view configuration.
    #[must_use]
    pub const fn new(schema: TableSchema, view: ViewConfig) -> Self {
        Self {
            schema,
            view,
            state: BindingState::Unmounted,
            batches_delivered: 0,
        }
    }

    /// Create a binding with the fixed quote graph schema and view.
    #[must_use]
    pub fn quote_graph() -> Self {
        Self::new(TableSchema::quote_graph(), ViewConfig::quote_graph())
    }

    /// Mount the binding: create the sink and configure the surface.
    ///
    /// Runs exactly once. The sink is created with the fixed schema,
    /// attached to the surface, and the five display attributes are set
    /// as a one-time declarative configuration. If the engine is
    /// unavailable the binding degrades to a no-op chart instead of
    /// failing; a second call warns and does nothing.
    pub fn mount(&mut self, engine: &dyn TableEngine, surface: &mut dyn ViewSurface) {
        if !matches!(self.state, BindingState::Unmounted) {
            tracing::warn!(stage = ?self.stage(), "mount called more than once; ignoring");
            return;
        }

        match engine.create_table(&self.schema) {
            Ok(sink) => {
                self.state = BindingState::SinkCreated(Arc::clone(&sink));

                surface.attach(Arc::clone(&sink));
                for (name, value) in self.view.attributes() {
                    surface.set_attribute(name, value);
                }

                tracing::info!(
                    columns = self.schema.columns().len(),
                    view = self.view.kind.as_str(),
                    "quote graph configured"
                );
                self.state = BindingState::Configured(sink);
            }
            Err(error) => {
                tracing::warn!(%error, "table engine unavailable; chart disabled");
                self.state = BindingState::Degraded;
            }
        }
    }

    /// Deliver a new batch of quote records.
    ///
    /// In `Configured`, normalizes the batch and appends the rows to the
    /// sink; one append call per delivery, in delivery order, with no
    /// client-side deduplication. Re-delivered records are appended
    /// again; the engine's aggregation collapses them. In any other
    /// stage the delivery is silently dropped.
    pub fn on_data(&mut self, batch: &[QuoteRecord]) {
        match &self.state {
            BindingState::Configured(sink) => {
                let rows = normalize_batch(batch);
                tracing::debug!(rows = rows.len(), "appending quote batch");
                sink.append(rows);
                self.batches_delivered += 1;
            }
            _ => {
                tracing::trace!(
                    stage = ?self.stage(),
                    dropped = batch.len(),
                    "update delivered with no live sink; ignoring"
                );
            }
        }
    }

    /// Release the sink and stop accepting updates. Idempotent.
    pub fn unmount(&mut self) {
        match std::mem::replace(&mut self.state, BindingState::Disposed) {
            BindingState::Configured(sink) | BindingState::SinkCreated(sink) => {
                tracing::info!(
                    rows = sink.row_count(),
                    batches = self.batches_delivered,
                    "quote graph unmounted"
                );
            }
            BindingState::Disposed => {
                tracing::trace!("unmount called more than once");
            }
            BindingState::Unmounted | BindingState::Degraded => {}
        }
    }

    /// Current lifecycle stage.
    #[must_use]
    pub const fn stage(&self) -> LifecycleStage {
        self.state.stage()
    }

    /// Number of batches appended since mount.
    #[must_use]
    pub const fn batches_delivered(&self) -> u64 {
        self.batches_delivered
    }
}

impl Default for GraphBinding {
    fn default() -> Self {
        Self::quote_graph()
    }
}

// =============================================================================
// Tests
// =============================================================================
