//! Common test utilities for building workflow documents.
use kairo::prelude::*;
use serde_json::{Map, json};

/// Builds a minimal node record with empty parameters.
#[allow(dead_code)]
pub fn make_node(name: &str, node_type: &str) -> WorkflowNode {
    WorkflowNode {
        parameters: json!({}),
        id: format!("id-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        node_type: node_type.to_string(),
        type_version: Some(json!(1)),
        position: None,
        notes_in_flow: None,
        extra: Map::new(),
    }
}

/// Builds a chat node shaped like the prompt target: a system message and a
/// user message under `parameters.messages.values`.
#[allow(dead_code)]
pub fn make_prompt_node(name: &str) -> WorkflowNode {
    let mut node = make_node(name, "n8n-nodes-base.openAi");
    node.parameters = json!({
        "resource": "chat",
        "messages": {
            "values": [
                { "role": "system", "content": "Você é um agente de suporte." },
                { "role": "user", "content": "=Mensagem antiga: {{ $json.body }}" }
            ]
        }
    });
    node
}

/// A workflow resembling the real v5.004 input: the four producers, the
/// prompt node, and a pre-existing edge from the first producer straight to
/// the prompt node (the miswiring the migration fixes).
#[allow(dead_code)]
pub fn support_workflow() -> WorkflowDocument {
    let plan = RewirePlan::default();

    let mut nodes: Vec<WorkflowNode> = plan
        .sources
        .iter()
        .map(|s| make_node(&s.name, "n8n-nodes-base.httpRequest"))
        .collect();
    nodes.push(make_prompt_node(&plan.prompt_node));

    let mut connections = indexmap::IndexMap::new();
    connections.insert(
        plan.sources[0].name.clone(),
        ConnectionPorts::single(Edge::main(plan.prompt_node.clone(), 0)),
    );

    WorkflowDocument {
        name: "agt_suporte_gynprog_v5.004".to_string(),
        nodes,
        connections,
        version_id: "11111111-2222-3333-4444-555555555555".to_string(),
        extra: Map::new(),
    }
}

/// The concrete scenario from the migration contract: only the four source
/// nodes exist and `connections` is empty.
#[allow(dead_code)]
pub fn sources_only_workflow() -> WorkflowDocument {
    let plan = RewirePlan::default();

    WorkflowDocument {
        name: "agt_suporte_gynprog_v5.004".to_string(),
        nodes: plan
            .sources
            .iter()
            .map(|s| make_node(&s.name, "n8n-nodes-base.httpRequest"))
            .collect(),
        connections: indexmap::IndexMap::new(),
        version_id: "old-version".to_string(),
        extra: Map::new(),
    }
}
