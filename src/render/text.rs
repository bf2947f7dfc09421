use super::{CanvasView, FlowCanvas};
use std::io::Write;
use tracing::warn;

/// Formats a view into a human-readable listing of nodes and edges.
pub fn format_view(view: &CanvasView) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "======== FLOW: {} nodes, {} edges [undo: {}, redo: {}] ========\n",
        view.nodes.len(),
        view.edges.len(),
        if view.can_undo { "on" } else { "off" },
        if view.can_redo { "on" } else { "off" },
    ));

    output.push_str("\n--- NODES ---\n");
    for node in &view.nodes {
        let marker = if node.selected { '*' } else { ' ' };
        output.push_str(&format!(
            "{} {:<16} {:<12} {:<32} {} {}\n",
            marker, node.id, node.kind_label, node.label, node.position, node.color
        ));
    }

    output.push_str("\n--- EDGES ---\n");
    for edge in &view.edges {
        let marker = if edge.selected { '*' } else { ' ' };
        let arrow = if edge.dashed { "-->" } else { "==>" };
        output.push_str(&format!(
            "{} {:<24} {} {} {} ({}",
            marker, edge.id, edge.source, arrow, edge.target, edge.kind
        ));
        if let Some(label) = &edge.label {
            output.push_str(&format!(", \"{}\"", label));
        }
        output.push_str(")\n");
    }
    output
}

/// A canvas that writes each rendered view as plain text.
pub struct TextCanvas<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of views rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FlowCanvas for TextCanvas<W> {
    fn render(&mut self, view: &CanvasView) {
        self.frames += 1;
        let text = format_view(view);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %e, "text canvas could not write frame");
        }
    }
}
