use super::*;

fn trace_with_hash(hash: &str) -> Trace {
    Trace {
        commit_hash: Some(hash.to_owned()),
        ..Trace::default()
    }
}

fn deployment(id: &str) -> DeploymentSummary {
    DeploymentSummary {
        id: id.to_owned(),
        ..DeploymentSummary::default()
    }
}

// =============================================================
// Header
// =============================================================

#[test]
fn trace_title_prefers_title() {
    let trace = Trace {
        title: Some("Bump ingress chart".to_owned()),
        ..trace_with_hash("abc123")
    };
    assert_eq!(trace_title(&trace), "Bump ingress chart");
}

#[test]
fn trace_title_falls_back_to_hash() {
    assert_eq!(trace_title(&trace_with_hash("abc123")), "Title of commit abc123");
}

#[test]
fn trace_title_empty_title_falls_back() {
    let trace = Trace {
        title: Some(String::new()),
        ..trace_with_hash("abc123")
    };
    assert_eq!(trace_title(&trace), "Title of commit abc123");
}

#[test]
fn trace_title_without_anything() {
    assert_eq!(trace_title(&Trace::default()), "Title of commit ");
}

#[test]
fn commit_hash_defaults_to_empty() {
    assert_eq!(commit_hash(&Trace::default()), "");
    assert_eq!(commit_hash(&trace_with_hash("f00d")), "f00d");
}

#[test]
fn commit_href_falls_back_to_hash_anchor() {
    assert_eq!(commit_href(&Trace::default()), "#");
    let trace = Trace {
        commit_url: Some(String::new()),
        ..Trace::default()
    };
    assert_eq!(commit_href(&trace), "#");
}

#[test]
fn commit_href_uses_url() {
    let trace = Trace {
        commit_url: Some("https://git.example.com/c/abc123".to_owned()),
        ..Trace::default()
    };
    assert_eq!(commit_href(&trace), "https://git.example.com/c/abc123");
}

// =============================================================
// Commit message
// =============================================================

#[test]
fn commit_message_absent_or_empty_hides_toggle() {
    assert!(!has_commit_message(&Trace::default()));
    let trace = Trace {
        commit_message: Some(String::new()),
        ..Trace::default()
    };
    assert!(!has_commit_message(&trace));
    assert_eq!(commit_message(&trace), None);
}

#[test]
fn commit_message_keeps_whitespace() {
    let trace = Trace {
        commit_message: Some("fix: retry\n\n  - longer timeout\n".to_owned()),
        ..Trace::default()
    };
    assert!(has_commit_message(&trace));
    assert_eq!(commit_message(&trace), Some("fix: retry\n\n  - longer timeout\n"));
}

#[test]
fn message_toggle_label_follows_state() {
    assert_eq!(message_toggle_label(false), "View commit message");
    assert_eq!(message_toggle_label(true), "Hide commit message");
}

// =============================================================
// Author
// =============================================================

#[test]
fn author_line_formats_author() {
    let trace = Trace {
        author: Some("octocat".to_owned()),
        ..Trace::default()
    };
    assert_eq!(author_line(&trace).as_deref(), Some("octocat authored"));
}

#[test]
fn author_line_hidden_without_author() {
    assert_eq!(author_line(&Trace::default()), None);
    let trace = Trace {
        author: Some(String::new()),
        ..Trace::default()
    };
    assert_eq!(author_line(&trace), None);
}

// =============================================================
// Deployments
// =============================================================

#[test]
fn deployment_href_joins_base_and_id() {
    assert_eq!(deployment_href("/deployments", &deployment("d-1")), "/deployments/d-1");
    assert_eq!(deployment_href("/deployments/", &deployment("d-2")), "/deployments/d-2");
}

#[test]
fn application_label_fallbacks() {
    let mut d = deployment("d-1");
    assert_eq!(application_label(&d), "-");
    d.application_id = Some("app-1".to_owned());
    assert_eq!(application_label(&d), "app-1");
    d.application_name = Some("frontend".to_owned());
    assert_eq!(application_label(&d), "frontend");
}

#[test]
fn deployment_status_defaults_to_pending() {
    let mut d = deployment("d-1");
    assert_eq!(deployment_status(&d), DeploymentStatus::Pending);
    d.status = Some(DeploymentStatus::Failure);
    assert_eq!(deployment_status(&d), DeploymentStatus::Failure);
}

#[test]
fn deployment_summary_fallback() {
    let mut d = deployment("d-1");
    assert_eq!(deployment_summary(&d), "No description.");
    d.summary = Some("Sync by the commit abc123".to_owned());
    assert_eq!(deployment_summary(&d), "Sync by the commit abc123");
}

#[test]
fn deployment_timestamp_prefers_updated() {
    let mut d = deployment("d-1");
    assert_eq!(deployment_timestamp(&d), None);
    d.created_at = Some(10);
    assert_eq!(deployment_timestamp(&d), Some(10));
    d.updated_at = Some(20);
    assert_eq!(deployment_timestamp(&d), Some(20));
}
