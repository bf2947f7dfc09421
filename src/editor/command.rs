use super::FlowEditor;
use crate::error::TemplateError;
use crate::graph::{EdgeChange, GraphNode, NodeChange};
use serde::{Deserialize, Serialize};

/// One editing intent, in a form that can be scripted or replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditorCommand {
    NodesChange { changes: Vec<NodeChange> },
    EdgesChange { changes: Vec<EdgeChange> },
    Connect { source: String, target: String },
    ApplyTemplate { name: String },
    AddNode { node: GraphNode },
    RemoveNode { id: String },
    RemoveEdge { id: String },
    Undo,
    Redo,
}

impl EditorCommand {
    /// Parses a JSON array of commands.
    pub fn parse_script(json: &str) -> Result<Vec<EditorCommand>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl FlowEditor {
    /// Runs one command. Only an unknown template name can fail.
    pub fn dispatch(&mut self, command: EditorCommand) -> Result<(), TemplateError> {
        match command {
            EditorCommand::NodesChange { changes } => self.on_nodes_change(&changes),
            EditorCommand::EdgesChange { changes } => self.on_edges_change(&changes),
            EditorCommand::Connect { source, target } => self.on_connect(&source, &target),
            EditorCommand::ApplyTemplate { name } => self.apply_named_template(&name)?,
            EditorCommand::AddNode { node } => self.add_node(node),
            EditorCommand::RemoveNode { id } => self.remove_node(&id),
            EditorCommand::RemoveEdge { id } => self.remove_edge(&id),
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::Redo => {
                self.redo();
            }
        }
        Ok(())
    }

    /// Runs commands in order, stopping at the first failure.
    pub fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = EditorCommand>,
    ) -> Result<(), TemplateError> {
        for command in commands {
            self.dispatch(command)?;
        }
        Ok(())
    }
}
