//! Domain values - commit identities, ancestor chains, branch candidates and
//! version results. Pure data, independent of git operations.

pub mod branch;
pub mod changes;
pub mod commit;
pub mod version;

pub use branch::{branch_label, BranchConfig};
pub use changes::{LocalChanges, NO_CHANGES};
pub use commit::{AncestorChain, CommitRef, SHORT_SHA_LEN};
pub use version::{
    FallbackResult, VersionOutcome, VersionResult, FALLBACK_VERSION_CODE, FALLBACK_VERSION_NAME,
};
