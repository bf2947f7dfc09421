//! # mtss-flow - Flow Editing Core for RTI/MTSS Workflows
//!
//! **mtss-flow** holds the state behind an instructional flow editor: a directed
//! graph of typed steps (screening, assessment, intervention, decision, group,
//! activity, condition) joined by typed edges, plus a linear undo/redo history
//! over snapshots of that graph.
//!
//! ## Core Workflow
//!
//! 1.  **Open a session**: Build a [`FlowEditor`](editor::FlowEditor), optionally
//!     from a stored document, a config and a template library.
//! 2.  **Feed it gestures**: Forward the canvas callbacks (`on_nodes_change`,
//!     `on_edges_change`, `on_connect`, `on_template_select`). Each one produces
//!     a new document and records it in the history.
//! 3.  **Navigate**: `undo` and `redo` move through the recorded snapshots. A new
//!     edit after an undo discards the entries that could have been redone.
//! 4.  **Save**: Hand the live document to a [`FlowStore`](store::FlowStore)
//!     when the user asks for it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mtss_flow::prelude::*;
//!
//! let mut editor = FlowEditor::new();
//! editor.add_node(GraphNode::new(
//!     "screen",
//!     Position::new(0.0, 0.0),
//!     NodeData::Screening { name: "Fall Benchmark".to_string(), tool: None, frequency: None },
//! ));
//! editor.add_node(GraphNode::new(
//!     "reading",
//!     Position::new(0.0, 120.0),
//!     NodeData::Intervention {
//!         name: "Small Group Reading".to_string(),
//!         duration: None,
//!         resources: vec![],
//!     },
//! ));
//! editor.on_connect("screen", "reading");
//! assert_eq!(editor.document().edges[0].id, "screen-reading");
//!
//! editor.undo();
//! assert!(editor.document().edges.is_empty());
//!
//! editor.redo();
//! editor.save(&JsonFileStore::new("flows/reading.json")).expect("save failed");
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod graph;
pub mod history;
pub mod prelude;
pub mod render;
pub mod store;
pub mod template;
