//! Deployment trace index page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever `DeploymentTracesState` holds. The API client that fills
//! it lives outside this crate and writes through the context signal; when it
//! also provides `LoadMoreTraces`, the page offers the next page.

use leptos::prelude::*;

use crate::components::deployment_trace_item::DeploymentTraceItem;
use crate::state::deployment_traces::{DeploymentTracesState, LoadMoreTraces, row_key};

/// One collapsible row per trace, newest first as delivered by the API.
#[component]
pub fn DeploymentTracesPage() -> impl IntoView {
    let traces = expect_context::<RwSignal<DeploymentTracesState>>();
    let load_more = use_context::<LoadMoreTraces>();

    let status_message = move || traces.with(DeploymentTracesState::status_message);
    let can_load_more = move || load_more.is_some() && traces.with(|state| state.has_more() && !state.loading);

    let on_load_more = move |_| {
        let Some(LoadMoreTraces(fetch)) = load_more else {
            return;
        };
        let mut cursor = None;
        traces.update(|state| cursor = state.begin_load_more());
        if let Some(cursor) = cursor {
            fetch.run(cursor);
        }
    };

    view! {
        <section class="deployment-traces">
            {move || status_message().map(|message| view! {
                <div class="deployment-traces__status">{message}</div>
            })}
            <div class="deployment-traces__list">
                <For
                    each=move || traces.with(|state| state.traces.iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, entry)| row_key(*index, entry)
                    children=|(_, entry)| view! {
                        <DeploymentTraceItem
                            trace=entry.trace
                            deployment_list=entry.deployments_list
                        />
                    }
                />
            </div>
            <Show when=can_load_more>
                <button type="button" class="deployment-traces__more" on:click=on_load_more>
                    "Load more"
                </button>
            </Show>
        </section>
    }
}
