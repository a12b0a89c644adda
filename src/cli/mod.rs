//! Command-line workflow

pub mod orchestration;

pub use orchestration::{run_version_workflow, VersionWorkflowArgs, WorkflowResult};
