//! Boundary to the component that draws the graph and captures gestures.
//!
//! The editor hands a [`CanvasView`] to every attached [`FlowCanvas`] after
//! each state transition. Colours and labels are decided here, from the node
//! and edge kinds, so a canvas implementation cannot override the type tag.

use crate::graph::{EdgeKind, GraphDocument, NodeKind, Position};

mod text;

pub use text::{TextCanvas, format_view};

/// Visual representation of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub color: &'static str,
    pub label: &'static str,
}

/// Visual representation of an edge kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeStyle {
    pub color: &'static str,
    pub dashed: bool,
    pub animated: bool,
}

impl NodeKind {
    pub fn style(&self) -> NodeStyle {
        let (color, label) = match self {
            NodeKind::Screening => ("#3b82f6", "Screening"),
            NodeKind::Assessment => ("#8b5cf6", "Assessment"),
            NodeKind::Intervention => ("#10b981", "Intervention"),
            NodeKind::Decision => ("#f59e0b", "Decision"),
            NodeKind::Group => ("#6366f1", "Group"),
            NodeKind::Activity => ("#14b8a6", "Activity"),
            NodeKind::Condition => ("#ef4444", "Condition"),
        };
        NodeStyle { color, label }
    }
}

impl EdgeKind {
    pub fn style(&self) -> EdgeStyle {
        match self {
            EdgeKind::Default => EdgeStyle {
                color: "#64748b",
                dashed: false,
                animated: false,
            },
            EdgeKind::Conditional => EdgeStyle {
                color: "#f59e0b",
                dashed: true,
                animated: false,
            },
            EdgeKind::Sequential => EdgeStyle {
                color: "#3b82f6",
                dashed: false,
                animated: true,
            },
            EdgeKind::Parallel => EdgeStyle {
                color: "#10b981",
                dashed: false,
                animated: false,
            },
            EdgeKind::Feedback => EdgeStyle {
                color: "#ef4444",
                dashed: true,
                animated: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub id: String,
    pub kind: NodeKind,
    /// Kind label, e.g. "Intervention".
    pub kind_label: &'static str,
    /// Payload label, e.g. the intervention name.
    pub label: String,
    pub color: &'static str,
    pub position: Position,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub label: Option<String>,
    pub color: &'static str,
    pub dashed: bool,
    pub animated: bool,
    pub selected: bool,
}

/// What a canvas draws for one document state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanvasView {
    pub nodes: Vec<RenderedNode>,
    pub edges: Vec<RenderedEdge>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl CanvasView {
    pub fn from_document(document: &GraphDocument) -> Self {
        let nodes = document
            .nodes
            .iter()
            .map(|node| {
                let style = node.kind().style();
                RenderedNode {
                    id: node.id.clone(),
                    kind: node.kind(),
                    kind_label: style.label,
                    label: node.label().to_string(),
                    color: style.color,
                    position: node.position,
                    selected: node.selected,
                }
            })
            .collect();
        let edges = document
            .edges
            .iter()
            .map(|edge| {
                let style = edge.kind.style();
                RenderedEdge {
                    id: edge.id.clone(),
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    kind: edge.kind,
                    label: edge.label.clone(),
                    color: style.color,
                    dashed: style.dashed,
                    animated: style.animated,
                    selected: edge.selected,
                }
            })
            .collect();
        Self {
            nodes,
            edges,
            can_undo: false,
            can_redo: false,
        }
    }

    pub fn with_history_flags(mut self, can_undo: bool, can_redo: bool) -> Self {
        self.can_undo = can_undo;
        self.can_redo = can_redo;
        self
    }
}

/// A component able to display the graph.
///
/// Gesture capture flows the other way, through the editor's
/// `on_nodes_change`, `on_edges_change`, `on_connect` and
/// `on_template_select` entry points.
pub trait FlowCanvas {
    fn render(&mut self, view: &CanvasView);
}
