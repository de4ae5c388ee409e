//! Disclosure state for a single deployment trace row.
//!
//! DESIGN
//! ======
//! Two independent flags, both collapsed on mount. The row wraps a fresh value
//! in an `RwSignal`, so nothing survives a remount and nothing is persisted.

#[cfg(test)]
#[path = "trace_item_test.rs"]
mod trace_item_test;

/// Visibility flags for one trace row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceItemState {
    /// Commit message panel is mounted.
    pub message_visible: bool,
    /// Deployment list panel is mounted.
    pub deployments_visible: bool,
}

impl TraceItemState {
    pub fn toggle_message(&mut self) {
        self.message_visible = !self.message_visible;
    }

    pub fn toggle_deployments(&mut self) {
        self.deployments_visible = !self.deployments_visible;
    }

    /// The header pins to the top of the scroll container while the
    /// deployment list is open.
    #[must_use]
    pub fn header_sticky(&self) -> bool {
        self.deployments_visible
    }
}
