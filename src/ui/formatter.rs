//! Pure formatting functions for UI output.
//!
//! Report text is built by `render_*` functions that return strings and can
//! be tested; the `display_*` functions only add color and print.

use crate::boundary::BoundaryWarning;
use crate::domain::{FallbackResult, VersionOutcome, VersionResult};
use std::fmt::Write;

const TITLE: &str = concat!("GitVersioner v", env!("CARGO_PKG_VERSION"));

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message and, when one
/// exists, the command that fixes it.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
    if let Some(action) = warning.corrective_action() {
        eprintln!("  Run: \x1b[36m{}\x1b[0m", action);
    }
}

/// Print the version report for an outcome.
pub fn display_report(outcome: &VersionOutcome, base_candidates: &[String]) {
    println!("\n\x1b[1m{}\x1b[0m", TITLE);
    print!("{}", render_body(outcome, base_candidates));
}

/// Full plain-text report, title included.
pub fn render_report(outcome: &VersionOutcome, base_candidates: &[String]) -> String {
    format!("{}\n{}", TITLE, render_body(outcome, base_candidates))
}

fn render_body(outcome: &VersionOutcome, base_candidates: &[String]) -> String {
    match outcome {
        VersionOutcome::Computed(result) => render_computed(result),
        VersionOutcome::Fallback(fallback) => render_fallback(fallback, base_candidates),
    }
}

fn render_computed(result: &VersionResult) -> String {
    let origin = result.origin_commit.short();
    let base_range = format!("{}..{}", result.initial_commit.short(), origin);
    let feature_range = format!("{}..{}", origin, result.current_commit.short());

    let mut out = String::new();
    let _ = writeln!(out, "-------------------");
    let _ = writeln!(out, "VersionCode: {}", result.version_code);
    let _ = writeln!(out, "VersionName: {}", result.version_name);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "baseBranch: {}",
        result.base_branch.as_deref().unwrap_or("none")
    );
    let _ = writeln!(
        out,
        "current branch: {}",
        result.branch_name.as_deref().unwrap_or("none")
    );
    let _ = writeln!(out, "current commit: {}", result.current_commit.short());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "baseBranch commits: {} ({})",
        result.base_branch_commit_count, base_range
    );
    let _ = writeln!(
        out,
        "featureBranch commits: {} ({})",
        result.feature_branch_commit_count, feature_range
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "timeComponent: {} (yearFactor:{})",
        result.time_component, result.year_factor
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "LocalChanges: {}", result.local_changes.short_stats());
    out
}

fn render_fallback(fallback: &FallbackResult, base_candidates: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-------------------");
    let _ = writeln!(out, "VersionCode: {}", fallback.version_code);
    let _ = writeln!(out, "VersionName: {}", fallback.version_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "baseBranch: {}", base_candidates.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "WARNING: {}", fallback.reason);
    let _ = writeln!(
        out,
        "Default values versionName: '{}', versionCode: {} are used instead.",
        fallback.version_name, fallback.version_code
    );
    if let Some(action) = fallback.reason.corrective_action() {
        let _ = writeln!(out, "Run:\n\t{}", action);
    }
    out
}
