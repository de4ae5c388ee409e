//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::deployment_traces::DeploymentTracesPage;
use crate::state::deployment_traces::DeploymentTracesState;
use crate::util::paths::PAGE_SEGMENT_DEPLOYMENT_TRACES;

/// Root application component.
///
/// Provides the deployment trace list as context; the API client updates it
/// through the same `RwSignal`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let traces = RwSignal::new(DeploymentTracesState {
        loading: true,
        ..DeploymentTracesState::default()
    });
    provide_context(traces);

    view! {
        <Stylesheet id="leptos" href="/pkg/web-console.css"/>
        <Title text="Deployment traces"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DeploymentTracesPage/>
                <Route path=StaticSegment(PAGE_SEGMENT_DEPLOYMENT_TRACES) view=DeploymentTracesPage/>
            </Routes>
        </Router>
    }
}
