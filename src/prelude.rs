//! Prelude module for convenient imports
//!
//! Re-exports the types and functions needed for the common load → migrate →
//! save pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use kairo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = load_workflow("workflow_v5_004.json")?;
//! let (document, report) = Migration::builder(document).build().apply()?;
//! save_workflow("workflow_v5_005.json", &document)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

// Document model and file I/O
pub use crate::document::{
    ConnectionPorts, Edge, WorkflowDocument, WorkflowNode, load_workflow, save_workflow,
};

// Migration engine
pub use crate::migration::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, EdgePolicy, Migration, MigrationBuilder, RewirePlan,
    SourceBinding,
};

// Change reporting
pub use crate::report::ChangeReport;

// Error types
pub use crate::error::{MigrationError, NodeRole};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
