//! Reusable flow patterns and the registry that holds them.

use crate::error::TemplateError;
use crate::graph::{GraphDocument, GraphEdge, GraphNode};
use ahash::AHashMap;
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::fs;

mod builtin;

/// A predefined set of nodes and edges that replaces the whole document
/// when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl FlowTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nodes,
            edges,
        }
    }

    /// Builds the document this template produces.
    ///
    /// Every node is shifted by an independent offset in `[-jitter, jitter]`
    /// on each axis so that applying the same template twice does not stack
    /// nodes exactly. Edges are copied verbatim.
    /// A jitter whose range cannot be sampled (zero, negative, or so large
    /// that its span overflows) leaves positions unchanged.
    pub fn instantiate<R: Rng + ?Sized>(&self, jitter: f64, rng: &mut R) -> GraphDocument {
        let offset = (jitter > 0.0)
            .then(|| Uniform::new_inclusive(-jitter, jitter).ok())
            .flatten();
        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let mut node = node.clone();
                if let Some(offset) = &offset {
                    let dx = offset.sample(rng);
                    let dy = offset.sample(rng);
                    node.position = node.position.offset(dx, dy);
                }
                node
            })
            .collect();
        GraphDocument::new(nodes, self.edges.clone())
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        GraphDocument::new(self.nodes.clone(), self.edges.clone())
            .validate()
            .map_err(|source| TemplateError::InvalidTemplate {
                name: self.name.clone(),
                source,
            })
    }
}

/// Name-keyed registry of templates offered by the editor.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: AHashMap<String, FlowTemplate>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The RTI/MTSS templates shipped with the crate.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for template in builtin::templates() {
            library.templates.insert(template.name.clone(), template);
        }
        library
    }

    /// Loads a JSON array of templates from `path`.
    pub fn from_file(path: &str) -> Result<Self, TemplateError> {
        let json = fs::read_to_string(path)
            .map_err(|e| TemplateError::Io(format!("Could not read file '{}': {}", path, e)))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let templates: Vec<FlowTemplate> =
            serde_json::from_str(json).map_err(|e| TemplateError::JsonParseError(e.to_string()))?;
        let mut library = Self::new();
        for template in templates {
            library.register(template)?;
        }
        Ok(library)
    }

    /// Adds or replaces a template after checking it is a consistent graph.
    pub fn register(&mut self, template: FlowTemplate) -> Result<(), TemplateError> {
        template.validate()?;
        self.templates.insert(template.name.clone(), template);
        Ok(())
    }

    /// Adds every template of `other`, replacing templates with the same name.
    pub fn merge(&mut self, other: TemplateLibrary) {
        self.templates.extend(other.templates);
    }

    pub fn get(&self, name: &str) -> Result<&FlowTemplate, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))
    }

    /// Registered template names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
