use super::plan::RewirePlan;
use super::wiring::EdgePolicy;
use super::{merge, metadata, prompt, wiring};
use crate::document::WorkflowDocument;
use crate::error::MigrationError;
use crate::report::ChangeReport;

/// A configured, ready-to-apply migration over one workflow document.
///
/// Created through [`Migration::builder`]. Applying consumes the migration and
/// yields the mutated document together with a [`ChangeReport`] of what
/// happened, in the fixed pipeline order: insert merge node, rewire
/// connections, patch prompt, update metadata.
#[derive(Debug)]
pub struct Migration {
    document: WorkflowDocument,
    plan: RewirePlan,
    strict: bool,
    edge_policy: EdgePolicy,
}

impl Migration {
    /// Starts building a migration over the given document, with the default
    /// v5.004 → v5.005 plan, lenient node lookup, and replace semantics.
    pub fn builder(document: WorkflowDocument) -> MigrationBuilder {
        MigrationBuilder {
            document,
            plan: RewirePlan::default(),
            strict: false,
            edge_policy: EdgePolicy::default(),
        }
    }

    /// Applies the migration, returning the mutated document and the change
    /// report.
    pub fn apply(mut self) -> Result<(WorkflowDocument, ChangeReport), MigrationError> {
        let mut report = ChangeReport::new();

        if self.strict {
            wiring::ensure_plan_targets_exist(&self.document, &self.plan)?;
        }

        let merge_node = merge::build_merge_node(&self.plan);
        report.push(format!(
            "Added node '{}' ({})",
            merge_node.name, merge_node.node_type
        ));
        self.document.nodes.push(merge_node);

        wiring::rewire(&mut self.document, &self.plan, self.edge_policy, &mut report);
        prompt::patch_prompt(&mut self.document, &self.plan, &mut report)?;
        metadata::update_metadata(&mut self.document, &self.plan, &mut report);

        Ok((self.document, report))
    }
}

/// Builder for [`Migration`].
#[derive(Debug)]
pub struct MigrationBuilder {
    document: WorkflowDocument,
    plan: RewirePlan,
    strict: bool,
    edge_policy: EdgePolicy,
}

impl MigrationBuilder {
    /// Overrides the default migration plan.
    pub fn plan(mut self, plan: RewirePlan) -> Self {
        self.plan = plan;
        self
    }

    /// When strict, fail with [`MigrationError::NodeNotFound`] if any node the
    /// plan names is absent, instead of silently rewiring into thin air.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Chooses between replacing a source's existing edges (the historical
    /// behavior) and merging the new edge in alongside them.
    pub fn edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn build(self) -> Migration {
        Migration {
            document: self.document,
            plan: self.plan,
            strict: self.strict,
            edge_policy: self.edge_policy,
        }
    }
}
