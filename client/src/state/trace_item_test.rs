use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn trace_item_state_starts_collapsed() {
    let state = TraceItemState::default();
    assert!(!state.message_visible);
    assert!(!state.deployments_visible);
    assert!(!state.header_sticky());
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn toggle_message_leaves_deployments_alone() {
    let mut state = TraceItemState::default();
    state.toggle_message();
    assert!(state.message_visible);
    assert!(!state.deployments_visible);

    state.toggle_deployments();
    state.toggle_message();
    assert!(!state.message_visible);
    assert!(state.deployments_visible);
}

#[test]
fn toggle_deployments_leaves_message_alone() {
    let mut state = TraceItemState::default();
    state.toggle_message();
    state.toggle_deployments();
    assert!(state.deployments_visible);
    assert!(state.message_visible);
    assert!(state.header_sticky());
}

#[test]
fn toggle_deployments_round_trip_restores_state() {
    let mut state = TraceItemState::default();
    state.toggle_deployments();
    let expanded = state;
    state.toggle_deployments();
    assert!(!state.deployments_visible);
    state.toggle_deployments();
    assert_eq!(state, expanded);
}
