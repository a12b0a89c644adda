pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod ui;

pub use analyzer::{FormatOptions, TimePolicy, Versioner};
pub use domain::{BranchConfig, VersionOutcome, VersionResult};
pub use error::{GitVersionerError, Result};
