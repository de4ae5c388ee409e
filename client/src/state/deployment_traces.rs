//! Page-level deployment trace list.
//!
//! DESIGN
//! ======
//! The API client owns fetching. It hands raw response bodies to
//! [`DeploymentTracesState::apply_response`] (first page) or
//! [`DeploymentTracesState::append_response`] (next page), and the page renders
//! whatever this state holds.

#[cfg(test)]
#[path = "deployment_traces_test.rs"]
mod deployment_traces_test;

use leptos::prelude::Callback;
use traces::{DeploymentTraceRes, ListDeploymentTracesResponse, TraceError};

pub const LOADING_LABEL: &str = "Loading deployment traces...";
pub const EMPTY_LABEL: &str = "No deployment traces found.";

/// Provided by the API client to fetch the page after the given cursor. The
/// index page offers a "load more" control only when this is in context.
#[derive(Clone, Copy)]
pub struct LoadMoreTraces(pub Callback<String>);

/// Decoded trace entries plus load status for the trace index page.
#[derive(Clone, Debug, Default)]
pub struct DeploymentTracesState {
    /// Entries in response order.
    pub traces: Vec<DeploymentTraceRes>,
    /// Cursor for the next page, if the server reported one.
    pub cursor: Option<String>,
    /// A request is in flight.
    pub loading: bool,
    /// Last decode failure, shown in place of the list.
    pub error: Option<String>,
}

impl DeploymentTracesState {
    /// Replace the entries with a freshly fetched first page.
    pub fn apply_response(&mut self, body: &str) {
        self.loading = false;
        match traces::decode_list_response(body) {
            Ok(response) => {
                self.traces.clear();
                self.absorb(response);
            }
            Err(e) => self.record_error(&e),
        }
    }

    /// Append a following page. Entries whose trace is already listed are
    /// skipped.
    pub fn append_response(&mut self, body: &str) {
        self.loading = false;
        match traces::decode_list_response(body) {
            Ok(response) => self.absorb(response),
            Err(e) => self.record_error(&e),
        }
    }

    /// Whether another page can be requested.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Mark a next-page request as started and hand back its cursor, or
    /// `None` when there is nothing more or a request is already in flight.
    pub fn begin_load_more(&mut self) -> Option<String> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.loading = true;
        self.cursor.clone()
    }

    /// Text to show instead of the list, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.traces.is_empty() {
            let label = if self.loading { LOADING_LABEL } else { EMPTY_LABEL };
            return Some(label.to_owned());
        }
        None
    }

    fn absorb(&mut self, response: ListDeploymentTracesResponse) {
        let has_more = response.has_more();
        for entry in response.traces_list {
            let key = entry_key(&entry);
            if !key.is_empty() && self.traces.iter().any(|existing| entry_key(existing) == key) {
                continue;
            }
            self.traces.push(entry);
        }
        self.cursor = if has_more { response.cursor } else { None };
        self.error = None;

        #[cfg(feature = "hydrate")]
        log::debug!("deployment traces loaded: total={} has_more={}", self.traces.len(), has_more);
    }

    fn record_error(&mut self, error: &TraceError) {
        #[cfg(feature = "hydrate")]
        log::warn!("deployment traces: {error}");

        self.error = Some(error.to_string());
    }
}

/// Identity of an entry: the trace id, falling back to the commit hash. Empty
/// when the trace carries neither; such entries are never deduplicated.
#[must_use]
pub fn entry_key(entry: &DeploymentTraceRes) -> String {
    entry
        .trace
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .or_else(|| entry.trace.commit_hash.clone())
        .unwrap_or_default()
}

/// Render key for the entry at `index`: [`entry_key`], or the position when
/// the entry has no identity of its own.
#[must_use]
pub fn row_key(index: usize, entry: &DeploymentTraceRes) -> String {
    let key = entry_key(entry);
    if key.is_empty() { format!("#{index}") } else { key }
}
