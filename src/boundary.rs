use std::fmt;

/// Conditions at the edge of what the history can tell us.
/// These are non-fatal: they either degrade the result or replace it with the
/// fixed fallback version, and should be reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The directory is not a git checkout, or HEAD has no commits yet
    NotAWorkingRepository,
    /// The history was cloned with a depth limit; counts would be wrong
    ShallowHistory,
    /// None of the configured base branches exist; the whole history is
    /// counted as base branch commits
    UnresolvedBaseBranch { candidates: Vec<String> },
}

impl BoundaryWarning {
    /// Command or step that fixes the condition, if there is one
    pub fn corrective_action(&self) -> Option<&'static str> {
        match self {
            BoundaryWarning::NotAWorkingRepository => Some("git init"),
            BoundaryWarning::ShallowHistory => Some("git fetch --unshallow"),
            BoundaryWarning::UnresolvedBaseBranch { .. } => None,
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NotAWorkingRepository => {
                write!(f, "Git not initialized or no commits yet")
            }
            BoundaryWarning::ShallowHistory => write!(
                f,
                "Git history is incomplete (shallow clone); \
                 the complete history is required to calculate the version"
            ),
            BoundaryWarning::UnresolvedBaseBranch { candidates } => {
                if candidates.is_empty() {
                    write!(f, "No base branch configured")
                } else {
                    write!(
                        f,
                        "None of the base branches exist: {}",
                        candidates.join(", ")
                    )
                }
            }
        }
    }
}
