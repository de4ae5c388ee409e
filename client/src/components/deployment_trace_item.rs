//! Collapsible deployment trace row.
//!
//! DESIGN
//! ======
//! The header (title, commit link, author, commit time) always renders. The
//! commit message and the deployment list are disclosure panels that are
//! unmounted, not hidden, while collapsed. Fallback text for missing fields
//! comes from `traces::display`.

#[cfg(test)]
#[path = "deployment_trace_item_test.rs"]
mod deployment_trace_item_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;
use traces::{DeploymentSummary, Trace, display, time};

use crate::components::deployment_item::DeploymentItem;
use crate::components::icons::{ArrowDropDownIcon, MoreHorizIcon};
use crate::state::trace_item::TraceItemState;
use crate::util::paths::PAGE_PATH_DEPLOYMENTS;

/// How long the deployment list stays mounted while it animates closed.
const COLLAPSE_DURATION: Duration = Duration::from_millis(250);

/// A deployment entry ready to render: list key, detail link, and payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRow {
    pub key: String,
    pub href: String,
    pub deployment: DeploymentSummary,
}

/// Rows for the expanded list, in input order, linking under `base_path`.
#[must_use]
pub fn deployment_rows(base_path: &str, deployments: &[DeploymentSummary]) -> Vec<DeploymentRow> {
    deployments
        .iter()
        .map(|deployment| DeploymentRow {
            key: deployment.id.clone(),
            href: display::deployment_href(base_path, deployment),
            deployment: deployment.clone(),
        })
        .collect()
}

/// One trace: commit header plus the deployments it triggered.
#[component]
pub fn DeploymentTraceItem(trace: Trace, deployment_list: Vec<DeploymentSummary>) -> impl IntoView {
    let state = RwSignal::new(TraceItemState::default());
    let deployments = StoredValue::new(deployment_list);

    let title = display::trace_title(&trace);
    let commit_hash = display::commit_hash(&trace).to_owned();
    let commit_href = display::commit_href(&trace).to_owned();
    let commit_message = display::commit_message(&trace).map(str::to_owned);
    let author_line = display::author_line(&trace);
    let time_label = time::format_commit_time_now(trace.commit_timestamp);
    let time_title = time::format_commit_time_full_local(trace.commit_timestamp);

    let message_visible = move || state.get().message_visible;
    let deployments_visible = move || state.get().deployments_visible;
    let header_sticky = move || state.get().header_sticky();
    let toggle_label = move || display::message_toggle_label(message_visible());

    let message_toggle = display::has_commit_message(&trace).then(|| {
        view! {
            <button
                type="button"
                class="deployment-trace__more"
                class:deployment-trace__more--active=message_visible
                title=toggle_label
                aria-label=toggle_label
                aria-expanded=move || message_visible().to_string()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    state.update(TraceItemState::toggle_message);
                }
            >
                <MoreHorizIcon/>
            </button>
        }
    });

    let message_panel = commit_message.map(|message| {
        view! {
            <Show when=message_visible>
                <div class="deployment-trace__message-wrap">
                    <p class="deployment-trace__message">{message.clone()}</p>
                </div>
            </Show>
        }
    });

    view! {
        <div class="deployment-trace">
            <div
                class="deployment-trace__header"
                class:deployment-trace__header--sticky=header_sticky
            >
                <div class="deployment-trace__summary">
                    <div class="deployment-trace__main">
                        <div class="deployment-trace__title-row">
                            <h6 class="deployment-trace__title">{title}</h6>
                            {message_toggle}
                        </div>
                        <a
                            class="deployment-trace__commit"
                            href=commit_href
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {commit_hash}
                        </a>
                    </div>
                    <button
                        type="button"
                        class="deployment-trace__expand"
                        class:deployment-trace__expand--rotated=deployments_visible
                        aria-label="expand"
                        aria-expanded=move || deployments_visible().to_string()
                        on:click=move |_| state.update(TraceItemState::toggle_deployments)
                    >
                        <ArrowDropDownIcon/>
                    </button>
                </div>

                {message_panel}

                <div class="deployment-trace__meta">
                    {author_line.map(|line| view! {
                        <span class="deployment-trace__author">{line}</span>
                    })}
                    <span class="deployment-trace__time" title=time_title>{time_label}</span>
                </div>
            </div>

            <AnimatedShow
                when=Signal::derive(deployments_visible)
                show_class="deployment-trace__deployments--expanding"
                hide_class="deployment-trace__deployments--collapsing"
                hide_delay=COLLAPSE_DURATION
            >
                <div class="deployment-trace__deployments">
                    {move || {
                        if deployments.with_value(Vec::is_empty) {
                            return view! {
                                <div class="deployment-trace__empty">
                                    {display::EMPTY_DEPLOYMENTS_LABEL}
                                </div>
                            }.into_any();
                        }
                        view! {
                            <ul class="deployment-trace__list">
                                <For
                                    each=move || deployments.with_value(|list| deployment_rows(PAGE_PATH_DEPLOYMENTS, list))
                                    key=|row| row.key.clone()
                                    children=|row| view! {
                                        <li class="deployment-trace__list-item">
                                            <A href=row.href attr:class="deployment-trace__link">
                                                <DeploymentItem deployment=row.deployment/>
                                            </A>
                                        </li>
                                    }
                                />
                            </ul>
                        }.into_any()
                    }}
                </div>
            </AnimatedShow>
        </div>
    }
}
