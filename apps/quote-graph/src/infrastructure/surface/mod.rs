//! Logging Rendering Surface
//!
//! A [`ViewSurface`] adapter standing in for the declarative markup
//! element of a real chart host. It records the attached sink and the
//! applied attributes, and logs each configuration step so a headless
//! run of the demo host shows the full setup sequence.

use std::sync::Arc;

use crate::application::ports::{TableSink, ViewSurface};

/// Surface adapter that records attachment and attributes.
#[derive(Default)]
pub struct LoggingSurface {
    sink: Option<Arc<dyn TableSink>>,
    attributes: Vec<(String, String)>,
}

impl LoggingSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a sink has been attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Attributes applied so far, in application order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up an applied attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl ViewSurface for LoggingSurface {
    fn attach(&mut self, sink: Arc<dyn TableSink>) {
        if self.sink.is_some() {
            tracing::warn!("surface already has a table attached; replacing");
        }
        tracing::debug!(rows = sink.row_count(), "table attached to surface");
        self.sink = Some(sink);
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        tracing::debug!(name, %value, "surface attribute set");
        self.attributes.push((name.to_string(), value));
    }
}

// =============================================================================
// Tests
// =============================================================================
