use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn orphan(name: &str) -> Diagnostic {
    Diagnostic::new(ErrorCode::W0001)
        .with_message("No base for profile class")
        .with_context(name)
}

#[test]
fn keeps_report_order() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.push(orphan("a")));
    assert!(queue.push(orphan("b")));

    let flushed = queue.flush();
    assert_eq!(flushed, vec![orphan("a"), orphan("b")]);
    assert!(queue.is_empty());
}

#[test]
fn identical_diagnostics_deduplicated() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.push(orphan("a")));
    assert!(!queue.push(orphan("a")));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dropped(), 1);
}

#[test]
fn unlimited_config_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.push(orphan("a")));
    assert!(queue.push(orphan("a")));
    assert_eq!(queue.len(), 2);
}

#[test]
fn limit_stops_retention_and_counts_drops() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        limit: 2,
        deduplicate: true,
    });
    assert!(queue.push(orphan("a")));
    assert!(queue.push(orphan("b")));
    assert!(queue.limit_reached());
    assert!(!queue.push(orphan("c")));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dropped(), 1);
}

#[test]
fn warning_count_skips_notes() {
    let mut queue = DiagnosticQueue::new();
    queue.push(orphan("a"));
    queue.push(Diagnostic::new(ErrorCode::N0001));
    assert_eq!(queue.warning_count(), 1);
    assert_eq!(queue.iter().count(), 2);
}
