//! The editing session for one open flow.
//!
//! A [`FlowEditor`] owns the live document, its undo/redo timeline, the
//! template library and the attached canvases. It is created when a flow is
//! opened and dropped when the editor closes; nothing is shared between
//! sessions and history does not outlive the session.

use crate::config::EditorConfig;
use crate::error::{StoreError, TemplateError};
use crate::graph::{EdgeChange, GraphDocument, GraphNode, NodeChange};
use crate::history::{History, HistoryEntry};
use crate::render::{CanvasView, FlowCanvas};
use crate::store::FlowStore;
use crate::template::{FlowTemplate, TemplateLibrary};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

mod command;

pub use command::EditorCommand;

pub struct FlowEditor {
    base: HistoryEntry,
    history: History,
    templates: TemplateLibrary,
    config: EditorConfig,
    canvases: Vec<Box<dyn FlowCanvas>>,
    saved: HistoryEntry,
}

pub struct FlowEditorBuilder {
    document: GraphDocument,
    templates: TemplateLibrary,
    config: EditorConfig,
    canvases: Vec<Box<dyn FlowCanvas>>,
}

impl Default for FlowEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowEditorBuilder {
    pub fn new() -> Self {
        Self {
            document: GraphDocument::default(),
            templates: TemplateLibrary::builtin(),
            config: EditorConfig::default(),
            canvases: Vec::new(),
        }
    }

    /// The document shown before the first edit.
    pub fn with_document(mut self, document: GraphDocument) -> Self {
        self.document = document;
        self
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the built-in template library.
    pub fn with_templates(mut self, templates: TemplateLibrary) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_template(mut self, template: FlowTemplate) -> Result<Self, TemplateError> {
        self.templates.register(template)?;
        Ok(self)
    }

    pub fn with_canvas(mut self, canvas: Box<dyn FlowCanvas>) -> Self {
        self.canvases.push(canvas);
        self
    }

    /// Loads the base document from `store` and builds the session with the
    /// configured templates, limits and canvases.
    pub fn open(self, store: &dyn FlowStore) -> Result<FlowEditor, StoreError> {
        let document = store.load()?;
        info!(
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "opened flow"
        );
        Ok(self.with_document(document).build())
    }

    pub fn build(self) -> FlowEditor {
        let history = match self.config.max_history {
            Some(limit) => History::with_capacity_limit(limit),
            None => History::new(),
        };
        let base = Arc::new(self.document);
        let mut editor = FlowEditor {
            saved: Arc::clone(&base),
            base,
            history,
            templates: self.templates,
            config: self.config,
            canvases: self.canvases,
        };
        editor.render();
        editor
    }
}

impl Default for FlowEditor {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FlowEditor {
    pub fn builder() -> FlowEditorBuilder {
        FlowEditorBuilder::new()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a default session on the document held by `store`.
    pub fn open(store: &dyn FlowStore) -> Result<Self, StoreError> {
        Self::builder().open(store)
    }

    /// The document currently on display.
    pub fn document(&self) -> &GraphDocument {
        self.live()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether the live document differs from the last saved (or opened) one.
    pub fn is_dirty(&self) -> bool {
        let live = self.live();
        !(Arc::ptr_eq(live, &self.saved) || **live == *self.saved)
    }

    pub fn attach_canvas(&mut self, canvas: Box<dyn FlowCanvas>) {
        self.canvases.push(canvas);
        self.render();
    }

    pub fn view(&self) -> CanvasView {
        CanvasView::from_document(self.live())
            .with_history_flags(self.history.can_undo(), self.history.can_redo())
    }

    /// Merges position, selection or payload updates into existing nodes.
    pub fn on_nodes_change(&mut self, changes: &[NodeChange]) {
        let next = self.live().with_node_changes(changes);
        self.record(next);
    }

    /// Merges selection, label or kind updates into existing edges.
    pub fn on_edges_change(&mut self, changes: &[EdgeChange]) {
        let next = self.live().with_edge_changes(changes);
        self.record(next);
    }

    /// Adds the edge `"{source}-{target}"` of the default kind.
    pub fn on_connect(&mut self, source: &str, target: &str) {
        let next = self.live().with_connection(source, target);
        self.record(next);
    }

    /// Replaces the whole document with a jittered copy of `template`.
    pub fn on_template_select(&mut self, template: &FlowTemplate) {
        self.apply_template_with_rng(template, &mut rand::rng());
    }

    pub fn apply_template_with_rng<R: Rng + ?Sized>(
        &mut self,
        template: &FlowTemplate,
        rng: &mut R,
    ) {
        let next = template.instantiate(self.config.template_jitter, rng);
        info!(
            template = %template.name,
            nodes = next.nodes.len(),
            edges = next.edges.len(),
            "applied template"
        );
        self.record(next);
    }

    /// Looks up a registered template by name and applies it.
    pub fn apply_named_template(&mut self, name: &str) -> Result<(), TemplateError> {
        let template = self.templates.get(name)?.clone();
        self.on_template_select(&template);
        Ok(())
    }

    /// Adds a node, replacing any node with the same id.
    pub fn add_node(&mut self, node: GraphNode) {
        let next = self.live().with_node(node);
        self.record(next);
    }

    /// Removes a node together with every edge attached to it.
    pub fn remove_node(&mut self, node_id: &str) {
        let next = self.live().without_node(node_id);
        self.record(next);
    }

    pub fn remove_edge(&mut self, edge_id: &str) {
        let next = self.live().without_edge(edge_id);
        self.record(next);
    }

    /// Returns `false` when there is no earlier entry.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            self.render();
        }
        moved
    }

    /// Returns `false` when there is no later entry.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            self.render();
        }
        moved
    }

    /// Persists the live document. A failure leaves history untouched.
    pub fn save(&mut self, store: &dyn FlowStore) -> Result<(), StoreError> {
        let live = Arc::clone(self.live());
        live.validate()?;
        match store.save(&live) {
            Ok(()) => {
                info!(
                    nodes = live.nodes.len(),
                    edges = live.edges.len(),
                    "saved flow"
                );
                self.saved = live;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "saving flow failed");
                Err(e)
            }
        }
    }

    fn live(&self) -> &HistoryEntry {
        self.history.current().unwrap_or(&self.base)
    }

    fn record(&mut self, document: GraphDocument) {
        self.history.record(document);
        debug!(
            cursor = ?self.history.cursor(),
            len = self.history.len(),
            "document updated"
        );
        self.render();
    }

    fn render(&mut self) {
        if self.canvases.is_empty() {
            return;
        }
        let view = self.view();
        for canvas in &mut self.canvases {
            canvas.render(&view);
        }
    }
}
