//! Repository history access
//!
//! This module defines the narrow capability contract the version computation
//! needs from a repository, allowing for multiple implementations including a
//! real git checkout and an in-memory history for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [HistoryProvider] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2History]: A real implementation using the `git2` crate
//! - [mock::MockHistory]: An in-memory commit graph for testing
//!
//! The branch name of the checkout is looked up separately through a chain of
//! [BranchNameSource]s (see [branch_source]), so a CI environment can supply a
//! name when the checkout is detached.
//!
//! # Usage
//!
//! ```rust
//! # use git_versioner::git::HistoryProvider;
//! # fn example<H: HistoryProvider>(history: &H) -> git_versioner::Result<()> {
//! if let Some(chain) = history.ancestor_chain("main")? {
//!     println!("main has {} commits, root {}", chain.len(), chain.root());
//! }
//! # Ok(())
//! # }
//! ```

pub mod branch_source;
pub mod mock;
pub mod repository;

pub use branch_source::{BranchNameSource, BranchResolver, EnvBranchSource, HistoryBranchSource};
pub use mock::{MockCommit, MockHistory};
pub use repository::Git2History;

use crate::domain::{AncestorChain, CommitRef, LocalChanges};
use crate::error::Result;

/// Read-only view of a repository's history
///
/// The provider is the only source of truth for ancestry and timestamps. The
/// version computation calls it synchronously and never caches what it returns.
///
/// ## Error Handling
///
/// Lookups that simply find nothing return `Ok(None)`. Any failure to read the
/// repository is returned as an error and aborts the computation.
pub trait HistoryProvider {
    /// Resolve a branch name, tag or commit id to a commit
    ///
    /// # Returns
    /// * `Ok(Some(CommitRef))` - The commit the reference points to
    /// * `Ok(None)` - If the reference does not exist
    /// * `Err` - If the repository cannot be read
    fn resolve(&self, reference: &str) -> Result<Option<CommitRef>>;

    /// First-parent history of a reference, head-first, ending at the root
    ///
    /// Returns `Ok(None)` if the reference does not exist.
    fn ancestor_chain(&self, reference: &str) -> Result<Option<AncestorChain>>;

    /// Commit time of a reference in seconds since the epoch
    ///
    /// # Returns
    /// * `Ok(i64)` - Commit timestamp
    /// * `Err` - If the reference cannot be resolved
    fn timestamp(&self, reference: &str) -> Result<i64>;

    /// Commit checked out at HEAD, `None` when there is no commit yet
    fn current_head(&self) -> Result<Option<CommitRef>>;

    /// Branch checked out at HEAD, `None` for a detached checkout
    fn current_branch_name(&self) -> Result<Option<String>>;

    /// Uncommitted changes in the working tree compared to HEAD
    fn local_changes(&self) -> Result<LocalChanges>;

    /// Whether this is a git checkout with at least one commit
    ///
    /// # Returns
    /// * `Ok(false)` - Not a repository, a bare repository, or no commits yet
    /// * `Err` - HEAD exists but cannot be read
    fn is_working_repository(&self) -> Result<bool>;

    /// Whether the history was truncated by a shallow clone
    fn is_shallow_history(&self) -> bool;
}
