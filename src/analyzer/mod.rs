//! Version derivation from commit history
//!
//! - `origin` - nearest commit shared with the base branch
//! - `counter` - commits on each side of that commit
//! - `version_code` - integer version code and the optional time policy
//! - `name` - version name rendering
//! - `versioner` - runs the steps above behind the project-state gate

pub mod counter;
pub mod name;
pub mod origin;
pub mod version_code;
pub mod versioner;

pub use counter::{count_commits, CommitCounts};
pub use name::{format_version_name, BranchSegment, FormatOptions, NameParts};
pub use origin::find_origin_commit;
pub use version_code::{version_code, TimePolicy, DEFAULT_YEAR_FACTOR, SECONDS_PER_YEAR};
pub use versioner::Versioner;
