//! Deployment trace data models and derivation helpers.
//!
//! This crate is UI-framework agnostic so client crates can consume it directly
//! for rendering deployment history views. It owns the response shapes, the
//! fallback display rules, deployment navigation paths, and commit time labels.

pub mod display;
pub mod error;
pub mod model;
pub mod time;

pub use error::TraceError;
pub use model::{
    DeploymentStatus, DeploymentSummary, DeploymentTraceRes, ListDeploymentTracesResponse, Trace,
    decode_list_response,
};
