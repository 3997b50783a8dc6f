use ahash::AHashSet;

use super::plan::RewirePlan;
use crate::document::{ConnectionPorts, Edge, WorkflowDocument};
use crate::error::{MigrationError, NodeRole};
use crate::report::ChangeReport;

/// How to treat a source node's pre-existing outgoing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Drop whatever the source pointed at and install the new edge alone.
    /// This is the historical behavior of the migration.
    #[default]
    Replace,
    /// Keep existing edges and append the new one to the first output list.
    Merge,
}

/// Checks that every node the plan names exists in the document.
pub(crate) fn ensure_plan_targets_exist(
    document: &WorkflowDocument,
    plan: &RewirePlan,
) -> Result<(), MigrationError> {
    let names: AHashSet<&str> = document.nodes.iter().map(|n| n.name.as_str()).collect();

    for source in &plan.sources {
        if !names.contains(source.name.as_str()) {
            return Err(MigrationError::NodeNotFound {
                name: source.name.clone(),
                role: NodeRole::Source,
            });
        }
    }
    if !names.contains(plan.downstream_node.as_str()) {
        return Err(MigrationError::NodeNotFound {
            name: plan.downstream_node.clone(),
            role: NodeRole::Downstream,
        });
    }
    if !names.contains(plan.prompt_node.as_str()) {
        return Err(MigrationError::NodeNotFound {
            name: plan.prompt_node.clone(),
            role: NodeRole::PromptTarget,
        });
    }
    Ok(())
}

/// Routes the four producers into the merge node and the merge node into the
/// downstream node.
pub(crate) fn rewire(
    document: &mut WorkflowDocument,
    plan: &RewirePlan,
    policy: EdgePolicy,
    report: &mut ChangeReport,
) {
    for source in &plan.sources {
        let edge = Edge::main(plan.merge_node_name.clone(), source.input_index);
        attach(document, &source.name, edge, policy);
        report.push(format!(
            "Rewired '{}' into '{}' (input {})",
            source.name, plan.merge_node_name, source.input_index
        ));
    }

    let edge = Edge::main(plan.downstream_node.clone(), 0);
    attach(document, &plan.merge_node_name, edge, policy);
    report.push(format!(
        "Connected '{}' to '{}' (input 0)",
        plan.merge_node_name, plan.downstream_node
    ));
}

fn attach(document: &mut WorkflowDocument, source: &str, edge: Edge, policy: EdgePolicy) {
    match policy {
        EdgePolicy::Replace => {
            document
                .connections
                .insert(source.to_string(), ConnectionPorts::single(edge));
        }
        EdgePolicy::Merge => {
            let ports = document.connections.entry(source.to_string()).or_default();
            if ports.main.is_empty() {
                ports.main.push(Vec::new());
            }
            // Idempotent: re-running the migration must not duplicate the edge.
            if !ports.main[0].iter().any(|e| e.same_route(&edge)) {
                ports.main[0].push(edge);
            }
        }
    }
}
