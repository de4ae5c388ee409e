//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `deployment_traces` holds the page-level response provided via Leptos
//! context; `trace_item` is the per-row disclosure state each trace row owns.

pub mod deployment_traces;
pub mod trace_item;
