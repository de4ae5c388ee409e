//! Inline SVG icons used by the trace rows.

use leptos::prelude::*;

/// Horizontal ellipsis.
#[component]
pub fn MoreHorizIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true" focusable="false">
            <path
                fill="currentColor"
                d="M6 10c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm12 0c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm-6 0c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z"
            ></path>
        </svg>
    }
}

/// Downward caret; the row rotates it while expanded.
#[component]
pub fn ArrowDropDownIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true" focusable="false">
            <path fill="currentColor" d="M7 10l5 5 5-5z"></path>
        </svg>
    }
}
