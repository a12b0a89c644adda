//! User interface module - console output.
//!
//! The tool is non-interactive; everything here is formatting (see
//! `formatter`). Output that other programs consume goes to stdout, while
//! diagnostics go to stderr.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_report, display_success, render_report,
};
