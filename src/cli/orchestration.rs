//! Main workflow orchestration logic
//!
//! Provides a clean separation between CLI argument parsing and the version
//! computation, so the workflow can be called programmatically without
//! depending on clap.

use crate::analyzer::Versioner;
use crate::config::Config;
use crate::domain::VersionOutcome;
use crate::error::Result;
use crate::git::{BranchResolver, Git2History};
use crate::output;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the version workflow
///
/// Mirrors the CLI Args. Values given here override the configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionWorkflowArgs {
    /// Directory inside the repository to version
    pub repo_path: PathBuf,

    /// Base branch candidates replacing the configured ones, if non-empty
    pub base_branches: Vec<String>,

    /// Leave "(files +add -del)" out of snapshot version names
    pub no_change_details: bool,

    /// Output file replacing the configured one
    pub output: Option<PathBuf>,
}

/// Result of a successful version workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The computed version, or the fixed fallback
    pub outcome: VersionOutcome,

    /// Base branch candidates that were used
    pub base_candidates: Vec<String>,

    /// Where the machine-readable document was written, if anywhere
    pub output_file: Option<PathBuf>,
}

/// Apply CLI overrides on top of the loaded configuration
pub fn effective_config(args: &VersionWorkflowArgs, mut config: Config) -> Config {
    if !args.base_branches.is_empty() {
        config.branches.base = args.base_branches.clone();
    }
    if args.no_change_details {
        config.format.add_local_changes_details = false;
    }
    if args.output.is_some() {
        config.output.file = args.output.clone();
    }
    config
}

/// Main version workflow
///
/// 1. Merge CLI overrides into the configuration
/// 2. Open the repository at `repo_path`
/// 3. Compute the version (or the fallback)
/// 4. Write the output file when one is configured
pub fn run_version_workflow(args: VersionWorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let config = effective_config(&args, config);
    let branch_config = config.branch_config();

    let history = Git2History::discover(&args.repo_path)?;
    let versioner = Versioner::new(&history)
        .with_branch_resolver(BranchResolver::for_history(
            &history,
            &config.ci.branch_env_vars,
        ))
        .with_time_policy(config.time_policy());

    let outcome = versioner.compute_version(&branch_config, &config.format_options())?;
    info!(
        version_code = outcome.version_code(),
        version_name = outcome.version_name(),
        "version computed"
    );

    if let Some(path) = &config.output.file {
        output::write_output(path, &outcome)?;
    }

    Ok(WorkflowResult {
        outcome,
        base_candidates: branch_config.candidates().to_vec(),
        output_file: config.output.file,
    })
}
