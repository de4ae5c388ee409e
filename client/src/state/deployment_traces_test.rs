use super::*;
use serde_json::json;

fn page(ids: &[&str], cursor: Option<&str>) -> String {
    let entries = ids
        .iter()
        .map(|id| {
            json!({
                "trace": { "id": id, "commitHash": format!("hash-{id}") },
                "deploymentsList": [{ "id": format!("d-{id}") }]
            })
        })
        .collect::<Vec<_>>();
    json!({ "tracesList": entries, "cursor": cursor }).to_string()
}

fn ids(state: &DeploymentTracesState) -> Vec<String> {
    state.traces.iter().map(entry_key).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = DeploymentTracesState::default();
    assert!(state.traces.is_empty());
    assert!(!state.loading);
    assert!(!state.has_more());
    assert_eq!(state.status_message().as_deref(), Some(EMPTY_LABEL));
}

#[test]
fn loading_without_entries_shows_loading_label() {
    let state = DeploymentTracesState {
        loading: true,
        ..DeploymentTracesState::default()
    };
    assert_eq!(state.status_message().as_deref(), Some(LOADING_LABEL));
}

// =============================================================
// apply_response
// =============================================================

#[test]
fn apply_response_replaces_entries_in_order() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&page(&["a", "b"], None));
    state.loading = true;
    state.apply_response(&page(&["c", "d", "e"], Some("next")));
    assert_eq!(ids(&state), vec!["c", "d", "e"]);
    assert!(!state.loading);
    assert!(state.has_more());
    assert_eq!(state.status_message(), None);
}

#[test]
fn apply_response_records_decode_error() {
    let mut state = DeploymentTracesState {
        loading: true,
        ..DeploymentTracesState::default()
    };
    state.apply_response("{oops");
    assert!(!state.loading);
    let message = state.status_message().unwrap();
    assert!(message.starts_with("failed to decode deployment traces"));
}

#[test]
fn apply_response_empty_body_is_an_error() {
    let mut state = DeploymentTracesState::default();
    state.apply_response("");
    assert_eq!(state.error.as_deref(), Some("empty deployment trace response"));
}

#[test]
fn apply_response_clears_previous_error() {
    let mut state = DeploymentTracesState::default();
    state.apply_response("{oops");
    state.apply_response(&page(&["a"], None));
    assert_eq!(state.error, None);
    assert_eq!(ids(&state), vec!["a"]);
}

#[test]
fn failed_apply_keeps_previous_entries() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&page(&["a"], None));
    state.apply_response("{oops");
    assert_eq!(ids(&state), vec!["a"]);
    assert!(state.status_message().is_some());
}

// =============================================================
// append_response
// =============================================================

#[test]
fn append_response_skips_known_traces() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&page(&["a", "b"], Some("c1")));
    state.append_response(&page(&["b", "c"], Some("")));
    assert_eq!(ids(&state), vec!["a", "b", "c"]);
    assert!(!state.has_more());
}

// =============================================================
// Keyless entries
// =============================================================

fn keyless_page(count: usize) -> String {
    let entries = (0..count)
        .map(|n| json!({ "trace": { "title": format!("untracked {n}") } }))
        .collect::<Vec<_>>();
    json!({ "tracesList": entries }).to_string()
}

#[test]
fn append_response_keeps_every_keyless_entry() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&keyless_page(2));
    state.append_response(&keyless_page(1));
    assert_eq!(state.traces.len(), 3);
}

#[test]
fn row_keys_stay_unique_without_trace_identity() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&keyless_page(2));
    let keys = state
        .traces
        .iter()
        .enumerate()
        .map(|(index, entry)| row_key(index, entry))
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["#0", "#1"]);
}

#[test]
fn row_key_prefers_entry_identity() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&page(&["a"], None));
    assert_eq!(row_key(7, &state.traces[0]), "a");
}

// =============================================================
// begin_load_more
// =============================================================

#[test]
fn begin_load_more_hands_out_cursor_once() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&page(&["a"], Some("c1")));
    assert_eq!(state.begin_load_more().as_deref(), Some("c1"));
    assert!(state.loading);
    assert_eq!(state.begin_load_more(), None);

    state.append_response(&page(&["b"], None));
    assert!(!state.loading);
    assert_eq!(ids(&state), vec!["a", "b"]);
}

#[test]
fn begin_load_more_without_cursor_is_noop() {
    let mut state = DeploymentTracesState::default();
    state.apply_response(&page(&["a"], None));
    assert_eq!(state.begin_load_more(), None);
    assert!(!state.loading);
}

// =============================================================
// entry_key
// =============================================================

#[test]
fn entry_key_falls_back_to_commit_hash() {
    let entry = DeploymentTraceRes {
        trace: traces::Trace {
            id: Some(String::new()),
            commit_hash: Some("abc".to_owned()),
            ..traces::Trace::default()
        },
        ..DeploymentTraceRes::default()
    };
    assert_eq!(entry_key(&entry), "abc");
    assert_eq!(entry_key(&DeploymentTraceRes::default()), "");
}
