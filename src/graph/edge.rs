use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship carried by an edge between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    #[default]
    Default,
    Conditional,
    Sequential,
    Parallel,
    Feedback,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Default => "default",
            EdgeKind::Conditional => "conditional",
            EdgeKind::Sequential => "sequential",
            EdgeKind::Parallel => "parallel",
            EdgeKind::Feedback => "feedback",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, rename = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
            label: None,
            selected: false,
        }
    }

    /// The edge a completed connection gesture produces. The id is derived
    /// from the endpoints only, so repeated connections collide.
    pub fn connection(source: &str, target: &str) -> Self {
        Self::new(
            Self::connection_id(source, target),
            source,
            target,
            EdgeKind::Default,
        )
    }

    pub fn connection_id(source: &str, target: &str) -> String {
        format!("{}-{}", source, target)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
