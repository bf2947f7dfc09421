//! Common test utilities for building flow documents and templates.
use mtss_flow::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// An intervention node at the given position.
#[allow(dead_code)]
pub fn intervention(id: &str, x: f64, y: f64) -> GraphNode {
    GraphNode::new(
        id,
        Position::new(x, y),
        NodeData::Intervention {
            name: format!("Intervention {}", id),
            duration: Some("6 weeks".to_string()),
            resources: vec!["Leveled readers".to_string()],
        },
    )
}

/// A screening node at the given position.
#[allow(dead_code)]
pub fn screening(id: &str, x: f64, y: f64) -> GraphNode {
    GraphNode::new(
        id,
        Position::new(x, y),
        NodeData::Screening {
            name: format!("Screening {}", id),
            tool: None,
            frequency: None,
        },
    )
}

/// A decision node at the given position.
#[allow(dead_code)]
pub fn decision(id: &str, x: f64, y: f64) -> GraphNode {
    GraphNode::new(
        id,
        Position::new(x, y),
        NodeData::Decision {
            criteria: "Below benchmark".to_string(),
            outcomes: vec!["Tier 2".to_string(), "Tier 3".to_string()],
            threshold: Some(25.0),
        },
    )
}

/// Screening -> decision -> intervention, joined by sequential edges.
#[allow(dead_code)]
pub fn create_simple_document() -> GraphDocument {
    GraphDocument::new(
        vec![
            screening("screen", 0.0, 0.0),
            decision("decide", 0.0, 120.0),
            intervention("support", 0.0, 240.0),
        ],
        vec![
            GraphEdge::new("e1", "screen", "decide", EdgeKind::Sequential),
            GraphEdge::new("e2", "decide", "support", EdgeKind::Conditional).with_label("Tier 2"),
        ],
    )
}

/// A two-node template with a single feedback edge.
#[allow(dead_code)]
pub fn create_simple_template() -> FlowTemplate {
    FlowTemplate::new(
        "check-and-support",
        "Screen, then support",
        vec![screening("t-screen", 100.0, 100.0), intervention("t-support", 100.0, 300.0)],
        vec![
            GraphEdge::new("t-e1", "t-screen", "t-support", EdgeKind::Sequential),
            GraphEdge::new("t-e2", "t-support", "t-screen", EdgeKind::Feedback),
        ],
    )
}

/// A canvas that keeps every view it is asked to draw.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingCanvas {
    pub frames: Rc<RefCell<Vec<CanvasView>>>,
}

impl FlowCanvas for RecordingCanvas {
    fn render(&mut self, view: &CanvasView) {
        self.frames.borrow_mut().push(view.clone());
    }
}

/// A unique scratch directory under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("mtss-flow-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}
