use crate::domain::{AncestorChain, CommitRef};
use std::collections::HashSet;

/// Find the divergence point of the current checkout from the base branch.
///
/// Scans `current` from head to root and returns the first commit that is also
/// part of `base`. Under the single-parent model this is the nearest common
/// ancestor. When the head itself is on the base branch the head is returned.
///
/// Returns `None` when the chains share no commit at all, which only happens
/// for histories with more than one root.
pub fn find_origin_commit<'c>(
    current: &'c AncestorChain,
    base: &AncestorChain,
) -> Option<&'c CommitRef> {
    let base_commits: HashSet<&CommitRef> = base.iter().collect();
    current.iter().find(|commit| base_commits.contains(commit))
}
