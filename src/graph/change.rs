use super::edge::EdgeKind;
use super::node::{NodeData, Position};
use serde::{Deserialize, Deserializer, Serialize};

/// A partial update to one node, as delivered by the canvas (drag, select)
/// or by a field editor (payload).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeChange {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,
}

impl NodeChange {
    pub fn position(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn select(id: impl Into<String>, selected: bool) -> Self {
        Self {
            id: id.into(),
            selected: Some(selected),
            ..Default::default()
        }
    }

    pub fn data(id: impl Into<String>, data: NodeData) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
            ..Default::default()
        }
    }
}

/// A partial update to one edge.
///
/// `label` distinguishes an absent field (keep the label) from an explicit
/// `null` (clear it).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeChange {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<Option<String>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EdgeKind>,
}

impl EdgeChange {
    pub fn select(id: impl Into<String>, selected: bool) -> Self {
        Self {
            id: id.into(),
            selected: Some(selected),
            ..Default::default()
        }
    }

    pub fn label(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(Some(label.into())),
            ..Default::default()
        }
    }

    pub fn clear_label(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(None),
            ..Default::default()
        }
    }

    pub fn kind(id: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind),
            ..Default::default()
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
