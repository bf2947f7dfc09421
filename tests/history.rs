//! Tests for the undo/redo timeline.
mod common;
use common::*;
use mtss_flow::prelude::*;
use std::sync::Arc;

fn doc_with(ids: &[&str]) -> GraphDocument {
    GraphDocument::new(
        ids.iter()
            .enumerate()
            .map(|(i, id)| intervention(id, i as f64 * 100.0, 0.0))
            .collect(),
        vec![],
    )
}

#[test]
fn test_empty_history() {
    let history = History::new();
    assert!(history.is_empty());
    assert_eq!(history.cursor(), None);
    assert!(history.current().is_none());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_first_record_seeds_cursor_zero() {
    let mut history = History::new();
    history.record(doc_with(&["A"]));
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), Some(0));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_redo_on_empty_history_are_noops() {
    let mut history = History::new();
    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(history.cursor(), None);
}

#[test]
fn test_undo_then_redo_restores_document() {
    let mut history = History::new();
    for n in 1..=5 {
        let ids: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        history.record(doc_with(&refs));
    }
    let before = Arc::clone(history.current().unwrap());

    for k in 0..=4 {
        for _ in 0..k {
            assert!(history.undo());
        }
        for _ in 0..k {
            assert!(history.redo());
        }
        assert_eq!(**history.current().unwrap(), *before);
        assert_eq!(history.cursor(), Some(4));
    }
}

#[test]
fn test_boundary_noops_leave_state_unchanged() {
    let mut history = History::new();
    history.record(doc_with(&["A"]));
    history.record(doc_with(&["A", "B"]));

    assert!(!history.redo());
    assert_eq!(history.cursor(), Some(1));
    assert_eq!(history.len(), 2);

    assert!(history.undo());
    assert!(!history.undo());
    assert_eq!(history.cursor(), Some(0));
    assert_eq!(history.len(), 2);
    assert_eq!(history.current().unwrap().nodes.len(), 1);
}

#[test]
fn test_record_after_undo_discards_redo_branch() {
    let mut history = History::new();
    history.record(doc_with(&["A"]));
    history.record(doc_with(&["A", "B"]));
    history.record(doc_with(&["A", "B", "C"]));

    assert!(history.undo());
    history.record(doc_with(&["A", "B", "D"]));

    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), Some(2));
    assert!(!history.can_redo());
    while history.redo() {}
    assert!(history.current().unwrap().node("C").is_none());
    assert!(history
        .entries()
        .iter()
        .all(|entry| entry.node("C").is_none()));
}

#[test]
fn test_can_undo_and_redo_in_middle() {
    let mut history = History::new();
    history.record(doc_with(&["A"]));
    history.record(doc_with(&["A", "B"]));
    history.record(doc_with(&["A", "B", "C"]));
    history.undo();

    assert!(history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn test_capacity_limit_drops_oldest_entries() {
    let mut history = History::with_capacity_limit(3);
    history.record(doc_with(&["A"]));
    history.record(doc_with(&["A", "B"]));
    history.record(doc_with(&["A", "B", "C"]));
    history.record(doc_with(&["A", "B", "C", "D"]));

    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), Some(2));
    assert_eq!(history.entries()[0].nodes.len(), 2);

    assert!(history.undo());
    assert!(history.undo());
    assert!(!history.undo());
    assert_eq!(history.current().unwrap().nodes.len(), 2);
}

#[test]
fn test_clear_returns_to_initial_state() {
    let mut history = History::new();
    history.record(doc_with(&["A"]));
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.cursor(), None);
}
