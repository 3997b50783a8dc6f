use uuid::Uuid;

use super::plan::RewirePlan;
use crate::document::WorkflowDocument;
use crate::report::ChangeReport;

/// Stamps the new document name and a freshly generated version identifier.
pub(crate) fn update_metadata(
    document: &mut WorkflowDocument,
    plan: &RewirePlan,
    report: &mut ChangeReport,
) {
    let old_name = std::mem::replace(&mut document.name, plan.new_workflow_name.clone());
    document.version_id = Uuid::new_v4().to_string();

    report.push(format!(
        "Renamed workflow '{}' to '{}' and regenerated versionId",
        old_name, document.name
    ));
}
