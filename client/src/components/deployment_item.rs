//! One deployment inside an expanded trace row.

use leptos::prelude::*;
use traces::{DeploymentSummary, display, time};

/// Application, status badge, summary, and last-update time of a deployment.
#[component]
pub fn DeploymentItem(deployment: DeploymentSummary) -> impl IntoView {
    let status = display::deployment_status(&deployment);
    let status_class = format!("deployment-item__status deployment-item__status--{}", status.css_modifier());
    let in_progress = !status.is_completed();
    let status_reason = deployment.status_reason.clone().filter(|reason| !reason.is_empty());
    let application = display::application_label(&deployment).to_owned();
    let summary = display::deployment_summary(&deployment).to_owned();
    let timestamp = display::deployment_timestamp(&deployment);
    let updated_label = time::relative_label_now(timestamp);
    let updated_title = time::format_commit_time_full_local(timestamp);

    view! {
        <div class="deployment-item" class:deployment-item--in-progress=in_progress>
            <span class=status_class title=status_reason>{status.label()}</span>
            <div class="deployment-item__body">
                <span class="deployment-item__application">{application}</span>
                <span class="deployment-item__summary">{summary}</span>
            </div>
            <span class="deployment-item__time" title=updated_title>{updated_label}</span>
        </div>
    }
}
