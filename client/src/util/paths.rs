//! Route paths owned by the deployment history pages.

/// Base path of deployment detail pages; a deployment lives at `{base}/{id}`.
pub const PAGE_PATH_DEPLOYMENTS: &str = "/deployments";

/// Route segment of the deployment trace index.
pub const PAGE_SEGMENT_DEPLOYMENT_TRACES: &str = "deployment_traces";
