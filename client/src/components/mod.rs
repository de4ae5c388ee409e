//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render deployment history rows from `traces` models. Row-local
//! disclosure state lives in the row; page data arrives via Leptos context.

pub mod deployment_item;
pub mod deployment_trace_item;
pub mod icons;
