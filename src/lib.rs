//! # Kairo - Workflow Definition Migration Engine
//!
//! **Kairo** patches JSON workflow definitions for node-graph automation
//! platforms. Its built-in plan performs the v5.004 → v5.005 migration of a
//! support-agent workflow: it inserts a context-merge function node,
//! rewires four parallel producer nodes into its input slots, points the
//! merge node at the response-generation node, rewrites that node's prompt
//! template against the consolidated context, and stamps fresh document
//! metadata.
//!
//! ## Core Workflow
//!
//! The pipeline is strictly sequential:
//!
//! 1.  **Load**: parse the workflow document from a JSON file into a typed
//!     model ([`document::WorkflowDocument`]). Unknown fields are preserved.
//! 2.  **Migrate**: build a [`migration::Migration`] with the builder, choose
//!     strictness and edge policy, and apply it. The default
//!     [`migration::RewirePlan`] carries every fixed name, index, and payload
//!     of the v5.005 migration.
//! 3.  **Save**: serialize the mutated document back to JSON and print the
//!     returned [`report::ChangeReport`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kairo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let document = load_workflow(DEFAULT_INPUT_PATH)?;
//!
//!     let (document, report) = Migration::builder(document)
//!         .strict(true)
//!         .edge_policy(EdgePolicy::Replace)
//!         .build()
//!         .apply()?;
//!
//!     save_workflow(DEFAULT_OUTPUT_PATH, &document)?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics worth knowing
//!
//! By default the rewiring *replaces* whatever the four source nodes pointed
//! at before, and a missing prompt node is skipped with a note in the report.
//! Both behaviors are configurable: `strict(true)` turns any missing plan
//! target into [`error::MigrationError::NodeNotFound`], and
//! [`migration::EdgePolicy::Merge`] preserves pre-existing edges instead of
//! discarding them.

pub mod document;
pub mod error;
pub mod migration;
pub mod prelude;
pub mod report;
