use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// The fixed set of step types a flow may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Screening,
    Assessment,
    Intervention,
    Decision,
    Group,
    Activity,
    Condition,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        NodeKind::Screening,
        NodeKind::Assessment,
        NodeKind::Intervention,
        NodeKind::Decision,
        NodeKind::Group,
        NodeKind::Activity,
        NodeKind::Condition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Screening => "screening",
            NodeKind::Assessment => "assessment",
            NodeKind::Intervention => "intervention",
            NodeKind::Decision => "decision",
            NodeKind::Group => "group",
            NodeKind::Activity => "activity",
            NodeKind::Condition => "condition",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific payload of a node. The variant determines the node's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeData {
    Screening {
        name: String,
        #[serde(default)]
        tool: Option<String>,
        #[serde(default)]
        frequency: Option<String>,
    },
    Assessment {
        name: String,
        #[serde(default)]
        measure: Option<String>,
        #[serde(default, rename = "targetScore")]
        target_score: Option<f64>,
    },
    Intervention {
        name: String,
        #[serde(default)]
        duration: Option<String>,
        #[serde(default)]
        resources: Vec<String>,
    },
    Decision {
        criteria: String,
        #[serde(default)]
        outcomes: Vec<String>,
        #[serde(default)]
        threshold: Option<f64>,
    },
    Group {
        name: String,
        #[serde(default)]
        tier: Option<u8>,
        #[serde(default)]
        members: Vec<String>,
    },
    Activity {
        name: String,
        #[serde(default)]
        description: Option<String>,
    },
    Condition {
        expression: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Screening { .. } => NodeKind::Screening,
            NodeData::Assessment { .. } => NodeKind::Assessment,
            NodeData::Intervention { .. } => NodeKind::Intervention,
            NodeData::Decision { .. } => NodeKind::Decision,
            NodeData::Group { .. } => NodeKind::Group,
            NodeData::Activity { .. } => NodeKind::Activity,
            NodeData::Condition { .. } => NodeKind::Condition,
        }
    }

    /// The text shown on the node body.
    pub fn label(&self) -> &str {
        match self {
            NodeData::Screening { name, .. }
            | NodeData::Assessment { name, .. }
            | NodeData::Intervention { name, .. }
            | NodeData::Group { name, .. }
            | NodeData::Activity { name, .. } => name,
            NodeData::Decision { criteria, .. } => criteria,
            NodeData::Condition { expression, .. } => expression,
        }
    }

    /// An empty payload of the given kind, as created by dropping a palette item.
    pub fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Screening => NodeData::Screening {
                name: String::new(),
                tool: None,
                frequency: None,
            },
            NodeKind::Assessment => NodeData::Assessment {
                name: String::new(),
                measure: None,
                target_score: None,
            },
            NodeKind::Intervention => NodeData::Intervention {
                name: String::new(),
                duration: None,
                resources: Vec::new(),
            },
            NodeKind::Decision => NodeData::Decision {
                criteria: String::new(),
                outcomes: Vec::new(),
                threshold: None,
            },
            NodeKind::Group => NodeData::Group {
                name: String::new(),
                tier: None,
                members: Vec::new(),
            },
            NodeKind::Activity => NodeData::Activity {
                name: String::new(),
                description: None,
            },
            NodeKind::Condition => NodeData::Condition {
                expression: String::new(),
                description: None,
            },
        }
    }
}

/// A typed step in a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
    #[serde(default)]
    pub selected: bool,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            position,
            data,
            selected: false,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    pub fn label(&self) -> &str {
        self.data.label()
    }
}
