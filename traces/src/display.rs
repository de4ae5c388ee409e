//! Display text and navigation targets derived from trace records.
//!
//! Every fallback the views render for a missing field is defined here, so the
//! substitution rules live in one place instead of being spread across markup.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::model::{DeploymentStatus, DeploymentSummary, Trace};

/// Link target used when a trace has no commit URL.
pub const COMMIT_URL_FALLBACK: &str = "#";

/// Placeholder rendered for an absent value.
pub const MISSING_VALUE: &str = "-";

/// Placeholder rendered when a trace triggered nothing.
pub const EMPTY_DEPLOYMENTS_LABEL: &str = "No deployment triggered";

pub const VIEW_COMMIT_MESSAGE_LABEL: &str = "View commit message";
pub const HIDE_COMMIT_MESSAGE_LABEL: &str = "Hide commit message";

/// Header text: the commit title, or `Title of commit {hash}` without one.
#[must_use]
pub fn trace_title(trace: &Trace) -> String {
    match non_empty(trace.title.as_deref()) {
        Some(title) => title.to_owned(),
        None => format!("Title of commit {}", trace.commit_hash.as_deref().unwrap_or_default()),
    }
}

#[must_use]
pub fn commit_hash(trace: &Trace) -> &str {
    trace.commit_hash.as_deref().unwrap_or_default()
}

#[must_use]
pub fn commit_href(trace: &Trace) -> &str {
    non_empty(trace.commit_url.as_deref()).unwrap_or(COMMIT_URL_FALLBACK)
}

/// Commit message body, present only when non-empty.
#[must_use]
pub fn commit_message(trace: &Trace) -> Option<&str> {
    non_empty(trace.commit_message.as_deref())
}

/// Whether the header should offer the commit-message toggle.
#[must_use]
pub fn has_commit_message(trace: &Trace) -> bool {
    commit_message(trace).is_some()
}

/// `"{author} authored"`, or `None` when the author is unknown.
#[must_use]
pub fn author_line(trace: &Trace) -> Option<String> {
    non_empty(trace.author.as_deref()).map(|author| format!("{author} authored"))
}

/// Title and accessible label of the commit-message toggle.
#[must_use]
pub fn message_toggle_label(message_visible: bool) -> &'static str {
    if message_visible {
        HIDE_COMMIT_MESSAGE_LABEL
    } else {
        VIEW_COMMIT_MESSAGE_LABEL
    }
}

/// Detail page path for a deployment, `{base}/{id}`.
#[must_use]
pub fn deployment_href(base_path: &str, deployment: &DeploymentSummary) -> String {
    format!("{}/{}", base_path.trim_end_matches('/'), deployment.id)
}

/// Application label for a deployment row.
#[must_use]
pub fn application_label(deployment: &DeploymentSummary) -> &str {
    non_empty(deployment.application_name.as_deref())
        .or_else(|| non_empty(deployment.application_id.as_deref()))
        .unwrap_or(MISSING_VALUE)
}

/// Deployment status; absent statuses read as the API zero value.
#[must_use]
pub fn deployment_status(deployment: &DeploymentSummary) -> DeploymentStatus {
    deployment.status.unwrap_or_default()
}

#[must_use]
pub fn deployment_summary(deployment: &DeploymentSummary) -> &str {
    non_empty(deployment.summary.as_deref()).unwrap_or("No description.")
}

/// Most recent known time of a deployment, in epoch seconds.
#[must_use]
pub fn deployment_timestamp(deployment: &DeploymentSummary) -> Option<i64> {
    deployment.updated_at.or(deployment.created_at)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
