use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workflow definition document for a node-graph automation platform.
///
/// Only the fields the migration touches are modeled as typed fields; every
/// other top-level key is captured in `extra` so a load/save round trip
/// preserves it byte-for-byte in content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default)]
    pub name: String,
    pub nodes: Vec<WorkflowNode>,
    pub connections: IndexMap<String, ConnectionPorts>,
    #[serde(rename = "versionId", default)]
    pub version_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowDocument {
    /// Finds the first node with the given display name.
    pub fn node_by_name(&self, name: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn node_by_name_mut(&mut self, name: &str) -> Option<&mut WorkflowNode> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }
}

/// A single node record. `parameters` stays opaque: the migration only ever
/// reaches into it along a fixed key chain, never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    #[serde(default)]
    pub parameters: Value,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "typeVersion", skip_serializing_if = "Option::is_none")]
    pub type_version: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Value>,
    #[serde(rename = "notesInFlow", skip_serializing_if = "Option::is_none")]
    pub notes_in_flow: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The outgoing connection entry for one source node: a list of parallel
/// output lists under the `main` port, plus any other port kinds the host
/// platform may use (preserved opaquely).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionPorts {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub main: Vec<Vec<Edge>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConnectionPorts {
    /// A connection entry with a single output list holding a single edge.
    pub fn single(edge: Edge) -> Self {
        Self {
            main: vec![vec![edge]],
            extra: Map::new(),
        }
    }
}

/// A directed link from a source node's output to a target node's input slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub node: String,
    #[serde(rename = "type")]
    pub port_type: String,
    pub index: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Edge {
    /// A `main`-typed edge into the given input slot of `target`.
    pub fn main(target: impl Into<String>, index: u32) -> Self {
        Self {
            node: target.into(),
            port_type: "main".to_string(),
            index,
            extra: Map::new(),
        }
    }

    /// Whether both edges describe the same route, ignoring any extra
    /// annotation fields they may carry.
    pub fn same_route(&self, other: &Edge) -> bool {
        self.node == other.node && self.port_type == other.port_type && self.index == other.index
    }
}
