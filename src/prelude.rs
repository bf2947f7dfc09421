//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! mtss-flow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use mtss_flow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = JsonFileStore::new("path/to/flow.json");
//! let mut editor = FlowEditor::open(&store)?;
//!
//! editor.apply_named_template("universal-screening")?;
//! editor.on_connect("tier3", "screen");
//! editor.undo();
//!
//! editor.save(&store)?;
//! # Ok(())
//! # }
//! ```

// Editing session
pub use crate::config::EditorConfig;
pub use crate::editor::{EditorCommand, FlowEditor, FlowEditorBuilder};
pub use crate::history::{History, HistoryEntry};

// Graph model
pub use crate::graph::{
    EdgeChange, EdgeKind, GraphDocument, GraphEdge, GraphNode, NodeChange, NodeData, NodeKind,
    Position,
};

// Templates
pub use crate::template::{FlowTemplate, TemplateLibrary};

// Collaborators
pub use crate::render::{CanvasView, FlowCanvas, TextCanvas};
pub use crate::store::{FlowStore, JsonFileStore, MemoryStore};

// Error types
pub use crate::error::{ConfigError, FlowError, StoreError, TemplateError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
