use serde_json::Value;

use super::plan::RewirePlan;
use crate::document::WorkflowDocument;
use crate::error::MigrationError;
use crate::report::ChangeReport;

/// The fixed key chain through the prompt node's parameters: the user-role
/// message of a chat-completion configuration.
const PROMPT_KEY_PATH: &str = "messages.values[1]";

/// Rewrites the prompt node's user-message template and annotation.
///
/// A missing prompt node is recorded in the report and skipped (the historical
/// behavior; strict mode rejects it before this step runs). A prompt node
/// whose parameters lack the expected key chain is a hard error.
pub(crate) fn patch_prompt(
    document: &mut WorkflowDocument,
    plan: &RewirePlan,
    report: &mut ChangeReport,
) -> Result<(), MigrationError> {
    let Some(node) = document.node_by_name_mut(&plan.prompt_node) else {
        report.push(format!(
            "Prompt node '{}' not found, template left untouched",
            plan.prompt_node
        ));
        return Ok(());
    };

    let user_message = node
        .parameters
        .get_mut("messages")
        .and_then(|m| m.get_mut("values"))
        .and_then(|v| v.get_mut(1))
        .and_then(|entry| entry.as_object_mut())
        .ok_or_else(|| MigrationError::PromptShape {
            node_name: plan.prompt_node.clone(),
            key_path: PROMPT_KEY_PATH.to_string(),
        })?;

    user_message.insert(
        "content".to_string(),
        Value::String(plan.prompt_template.clone()),
    );
    node.notes_in_flow = Some(plan.prompt_notes.clone());

    report.push(format!(
        "Rewrote prompt template and annotation on '{}'",
        plan.prompt_node
    ));
    Ok(())
}
