use crate::boundary::BoundaryWarning;
use crate::domain::{CommitRef, LocalChanges};
use serde::Serialize;

/// Version code reported when the history cannot be trusted
pub const FALLBACK_VERSION_CODE: u64 = 1;

/// Version name reported when the history cannot be trusted
pub const FALLBACK_VERSION_NAME: &str = "undefined";

/// Snapshot of the version derived from one repository state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResult {
    pub version_code: u64,
    pub version_name: String,
    pub base_branch_commit_count: u64,
    pub feature_branch_commit_count: u64,
    pub origin_commit: CommitRef,
    pub initial_commit: CommitRef,
    pub current_commit: CommitRef,
    pub base_branch: Option<String>,
    pub branch_name: Option<String>,
    pub local_changes: LocalChanges,
    pub time_component: u64,
    pub year_factor: u64,
    #[serde(skip)]
    pub warnings: Vec<BoundaryWarning>,
}

/// Fixed version reported when the repository state rules out counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResult {
    pub version_code: u64,
    pub version_name: String,
    pub reason: BoundaryWarning,
}

impl FallbackResult {
    pub fn new(reason: BoundaryWarning) -> Self {
        FallbackResult {
            version_code: FALLBACK_VERSION_CODE,
            version_name: FALLBACK_VERSION_NAME.to_string(),
            reason,
        }
    }
}

/// Outcome of one version computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionOutcome {
    Computed(VersionResult),
    Fallback(FallbackResult),
}

impl VersionOutcome {
    pub fn version_code(&self) -> u64 {
        match self {
            VersionOutcome::Computed(result) => result.version_code,
            VersionOutcome::Fallback(fallback) => fallback.version_code,
        }
    }

    pub fn version_name(&self) -> &str {
        match self {
            VersionOutcome::Computed(result) => &result.version_name,
            VersionOutcome::Fallback(fallback) => &fallback.version_name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, VersionOutcome::Fallback(_))
    }

    /// The computed result, if the history allowed computing one
    pub fn computed(&self) -> Option<&VersionResult> {
        match self {
            VersionOutcome::Computed(result) => Some(result),
            VersionOutcome::Fallback(_) => None,
        }
    }
}
