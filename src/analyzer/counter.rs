use crate::domain::{AncestorChain, CommitRef};

/// Commit counts on both sides of the origin commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCounts {
    /// Commits from the root up to and including the origin commit
    pub base_branch_commit_count: u64,
    /// Commits after the origin commit up to and including HEAD
    pub feature_branch_commit_count: u64,
    /// Root of the current history
    pub initial_commit: CommitRef,
}

/// Count commits of `current` relative to `origin`.
///
/// The base count is the length of the origin commit's own history, taken as
/// the suffix of `current` that starts at `origin`. It therefore depends only
/// on the divergence point and not on where the base branch tip is now.
///
/// Returns `None` if `origin` is not part of `current`.
pub fn count_commits(current: &AncestorChain, origin: &CommitRef) -> Option<CommitCounts> {
    let base = current.len_from(origin)?;
    let feature = current.len() - base;

    Some(CommitCounts {
        base_branch_commit_count: base as u64,
        feature_branch_commit_count: feature as u64,
        initial_commit: current.root().clone(),
    })
}
