use super::change::{EdgeChange, NodeChange};
use super::edge::GraphEdge;
use super::node::{GraphNode, NodeData};
use crate::error::FlowError;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// The full set of nodes and edges of one flow.
///
/// All mutating methods are total: references to ids that do not exist are
/// skipped instead of reported, so callers can always record the result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl GraphDocument {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Parses and validates a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        let document: Self =
            serde_json::from_str(json).map_err(|e| FlowError::JsonParseError(e.to_string()))?;
        document.validate()?;
        Ok(document)
    }

    pub fn from_file(path: &str) -> Result<Self, FlowError> {
        let json = fs::read_to_string(path)
            .map_err(|e| FlowError::Io(format!("Could not read file '{}': {}", path, e)))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, FlowError> {
        serde_json::to_string_pretty(self).map_err(|e| FlowError::JsonParseError(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Edges leaving `node_id`.
    pub fn outgoing<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == node_id)
    }

    /// Edges arriving at `node_id`.
    pub fn incoming<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.target == node_id)
    }

    /// Checks id uniqueness, group tiers and that every edge endpoint exists.
    pub fn validate(&self) -> Result<(), FlowError> {
        for node in &self.nodes {
            if let NodeData::Group {
                tier: Some(tier), ..
            } = node.data
            {
                if !(1..=3).contains(&tier) {
                    return Err(FlowError::InvalidTier {
                        node_id: node.id.clone(),
                        tier,
                    });
                }
            }
        }
        if let Some(id) = self.nodes.iter().map(|n| n.id.as_str()).duplicates().next() {
            return Err(FlowError::DuplicateNodeId(id.to_string()));
        }
        if let Some(id) = self.edges.iter().map(|e| e.id.as_str()).duplicates().next() {
            return Err(FlowError::DuplicateEdgeId(id.to_string()));
        }

        let node_ids: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(FlowError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns a copy with each change merged into the node it names.
    ///
    /// A payload patch only applies when it has the node's kind; the type tag
    /// is never changed through this path.
    pub fn with_node_changes(&self, changes: &[NodeChange]) -> Self {
        let mut nodes = self.nodes.clone();
        for change in changes {
            let Some(node) = nodes.iter_mut().find(|n| n.id == change.id) else {
                debug!(node_id = %change.id, "ignoring change for unknown node");
                continue;
            };
            if let Some(position) = change.position {
                node.position = position;
            }
            if let Some(selected) = change.selected {
                node.selected = selected;
            }
            if let Some(data) = &change.data {
                if data.kind() == node.kind() {
                    node.data = data.clone();
                } else {
                    debug!(
                        node_id = %node.id,
                        expected = %node.kind(),
                        found = %data.kind(),
                        "ignoring payload of a different node kind"
                    );
                }
            }
        }
        Self {
            nodes,
            edges: self.edges.clone(),
        }
    }

    /// Returns a copy with each change merged into the edge it names.
    pub fn with_edge_changes(&self, changes: &[EdgeChange]) -> Self {
        let mut edges = self.edges.clone();
        for change in changes {
            let Some(edge) = edges.iter_mut().find(|e| e.id == change.id) else {
                debug!(edge_id = %change.id, "ignoring change for unknown edge");
                continue;
            };
            if let Some(selected) = change.selected {
                edge.selected = selected;
            }
            if let Some(label) = &change.label {
                edge.label = label.clone();
            }
            if let Some(kind) = change.kind {
                edge.kind = kind;
            }
        }
        Self {
            nodes: self.nodes.clone(),
            edges,
        }
    }

    /// Returns a copy with a default edge from `source` to `target`.
    ///
    /// An existing edge with the synthesized id is overwritten in place.
    /// Unknown endpoints leave the edges untouched.
    pub fn with_connection(&self, source: &str, target: &str) -> Self {
        let mut next = self.clone();
        if !self.contains_node(source) || !self.contains_node(target) {
            debug!(from = source, to = target, "ignoring connection to unknown node");
            return next;
        }
        let edge = GraphEdge::connection(source, target);
        match next.edges.iter_mut().find(|e| e.id == edge.id) {
            Some(existing) => *existing = edge,
            None => next.edges.push(edge),
        }
        next
    }

    /// Returns a copy with `node` added, replacing any node with the same id.
    pub fn with_node(&self, node: GraphNode) -> Self {
        let mut next = self.clone();
        match next.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node,
            None => next.nodes.push(node),
        }
        next
    }

    /// Returns a copy without the node and without every edge touching it.
    pub fn without_node(&self, node_id: &str) -> Self {
        if !self.contains_node(node_id) {
            debug!(node_id, "ignoring removal of unknown node");
            return self.clone();
        }
        Self {
            nodes: self
                .nodes
                .iter()
                .filter(|n| n.id != node_id)
                .cloned()
                .collect(),
            edges: self
                .edges
                .iter()
                .filter(|e| !e.touches(node_id))
                .cloned()
                .collect(),
        }
    }

    pub fn without_edge(&self, edge_id: &str) -> Self {
        if self.edge(edge_id).is_none() {
            debug!(edge_id, "ignoring removal of unknown edge");
        }
        Self {
            nodes: self.nodes.clone(),
            edges: self
                .edges
                .iter()
                .filter(|e| e.id != edge_id)
                .cloned()
                .collect(),
        }
    }
}
