use thiserror::Error;

/// Errors raised when a flow document is parsed or checked for consistency.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Node id '{0}' is used by more than one node")]
    DuplicateNodeId(String),

    #[error("Edge id '{0}' is used by more than one edge")]
    DuplicateEdgeId(String),

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which does not exist")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },

    #[error("Group node '{node_id}' has tier {tier}; tiers run from 1 to 3")]
    InvalidTier { node_id: String, tier: u8 },
}

/// Errors that can occur while registering, loading or looking up templates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("No template named '{0}' is registered")]
    UnknownTemplate(String),

    #[error("Template '{name}' is invalid: {source}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: FlowError,
    },

    #[error("Failed to parse template JSON: {0}")]
    JsonParseError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors reported by a persistence collaborator. They never affect the
/// in-memory history.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Document rejected: {0}")]
    Invalid(#[from] FlowError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when loading editor configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
