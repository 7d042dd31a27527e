use thiserror::Error;

/// The node table does not describe a single rooted tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTreeError {
    #[error("tree has no \"root\" node")]
    MissingRoot,

    #[error("node not found: {0}")]
    UnknownNode(String),

    #[error("node {parent} lists unknown child {child}")]
    UnknownChild { parent: String, child: String },

    #[error("node {child} is a child of both {first} and {second}")]
    MultipleParents {
        child: String,
        first: String,
        second: String,
    },

    #[error("cycle detected at node {0}")]
    CycleDetected(String),

    #[error("expected {expected} edges for {nodes} nodes, found {found}")]
    EdgeCountMismatch {
        nodes: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] MalformedTreeError),

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    /// Short machine-readable kind for the host.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutError::MalformedTree(_) => "malformed_tree",
            LayoutError::InvalidConfig(_) => "invalid_config",
            LayoutError::Json(_) => "json",
        }
    }
}
