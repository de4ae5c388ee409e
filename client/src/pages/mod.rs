//! Route-level page components.

pub mod deployment_traces;
