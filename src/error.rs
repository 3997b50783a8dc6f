use std::fmt;
use thiserror::Error;

/// The role a named node plays in a migration plan.
///
/// Carried inside [`MigrationError::NodeNotFound`] so strict-mode failures
/// say not just which node is missing, but why the plan needed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// One of the parallel producers rewired into the merge node.
    Source,
    /// The node the merge node feeds into.
    Downstream,
    /// The node whose prompt template gets rewritten.
    PromptTarget,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Source => write!(f, "source"),
            NodeRole::Downstream => write!(f, "downstream"),
            NodeRole::PromptTarget => write!(f, "prompt target"),
        }
    }
}

/// Errors that can occur while loading, migrating, or saving a workflow document.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Failed to read workflow file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse workflow JSON from '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize workflow document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write workflow file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Strict mode only: a node named by the migration plan is absent.
    #[error("The {role} node '{name}' was not found in the workflow")]
    NodeNotFound { name: String, role: NodeRole },

    /// The prompt target exists but its parameters lack the expected key chain.
    #[error("Node '{node_name}' is missing expected key path '{key_path}' in its parameters")]
    PromptShape { node_name: String, key_path: String },
}
