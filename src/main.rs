use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use git_versioner::cli::{run_version_workflow, VersionWorkflowArgs};
use git_versioner::config;
use git_versioner::domain::VersionOutcome;
use git_versioner::output;
use git_versioner::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Human readable report
    Text,
    /// Only the version name
    Name,
    /// JSON document
    Json,
}

#[derive(clap::Parser)]
#[command(
    name = "git-versioner",
    about = "Derive a build version code and name from git history"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = ".", help = "Directory inside the repository")]
    path: PathBuf,

    #[arg(
        short,
        long = "base-branch",
        help = "Base branch candidate, in order of preference (repeatable)"
    )]
    base_branch: Vec<String>,

    #[arg(long, help = "Omit the change statistics from -SNAPSHOT versions")]
    no_change_details: bool,

    #[arg(short, long, help = "Write a machine-readable JSON file")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Console output format")]
    format: OutputFormat,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-versioner {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = VersionWorkflowArgs {
        repo_path: args.path,
        base_branches: args.base_branch,
        no_change_details: args.no_change_details,
        output: args.output,
    };

    let result = match run_version_workflow(workflow_args, config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Cannot compute version: {}", e));
            std::process::exit(1);
        }
    };

    match &result.outcome {
        VersionOutcome::Fallback(fallback) => ui::display_boundary_warning(&fallback.reason),
        VersionOutcome::Computed(computed) => {
            for warning in &computed.warnings {
                ui::display_boundary_warning(warning);
            }
        }
    }

    match args.format {
        OutputFormat::Text => {
            ui::display_report(&result.outcome, &result.base_candidates);
            if let Some(path) = &result.output_file {
                ui::display_success(&format!("Wrote {}", path.display()));
            }
        }
        OutputFormat::Name => println!("{}", result.outcome.version_name()),
        OutputFormat::Json => println!("{}", output::to_json(&result.outcome)?),
    }

    Ok(())
}
