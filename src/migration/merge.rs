use serde_json::{Map, json};
use uuid::Uuid;

use super::plan::RewirePlan;
use crate::document::WorkflowNode;

/// Builds the merge node record described by the plan, with a freshly
/// generated unique id.
pub(crate) fn build_merge_node(plan: &RewirePlan) -> WorkflowNode {
    WorkflowNode {
        parameters: json!({ "functionCode": plan.merge_function_code }),
        id: Uuid::new_v4().to_string(),
        name: plan.merge_node_name.clone(),
        node_type: plan.merge_node_type.clone(),
        type_version: Some(json!(1)),
        position: Some(json!([
            plan.merge_node_position[0],
            plan.merge_node_position[1]
        ])),
        notes_in_flow: Some(plan.merge_node_notes.clone()),
        extra: Map::new(),
    }
}
