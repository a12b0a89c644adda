use crate::domain::{branch_label, CommitRef, LocalChanges};
use std::fmt::Write;

/// Options for rendering the version name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Append "(files +additions -deletions)" after "-SNAPSHOT"
    pub add_local_changes_details: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            add_local_changes_details: true,
        }
    }
}

/// What identifies the checkout in the version name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchSegment<'a> {
    /// The checkout is the base branch itself
    Omitted,
    /// Last path segment of the branch name
    Label(&'a str),
    /// Detached checkout, identified by its abbreviated commit id
    Sha(&'a str),
}

impl<'a> BranchSegment<'a> {
    pub fn new(
        branch_name: Option<&'a str>,
        base_branch: Option<&str>,
        head: &'a CommitRef,
    ) -> Self {
        match branch_name {
            Some(name) if Some(name) == base_branch => BranchSegment::Omitted,
            Some(name) => BranchSegment::Label(branch_label(name)),
            None => BranchSegment::Sha(head.short()),
        }
    }
}

/// Everything the version name is rendered from
#[derive(Debug, Clone)]
pub struct NameParts<'a> {
    pub version_code: u64,
    pub branch: BranchSegment<'a>,
    pub feature_branch_commit_count: u64,
    pub local_changes: LocalChanges,
}

/// Render `<code>[-<label>][+<feature count>][-SNAPSHOT[(<changes>)]]`
pub fn format_version_name(parts: &NameParts<'_>, options: &FormatOptions) -> String {
    let mut name = parts.version_code.to_string();

    match parts.branch {
        BranchSegment::Omitted => {}
        BranchSegment::Label(label) | BranchSegment::Sha(label) => {
            let _ = write!(name, "-{}", label);
        }
    }

    if parts.feature_branch_commit_count > 0 {
        let _ = write!(name, "+{}", parts.feature_branch_commit_count);
    }

    if !parts.local_changes.is_clean() {
        name.push_str("-SNAPSHOT");
        if options.add_local_changes_details {
            let _ = write!(name, "({})", parts.local_changes.compact());
        }
    }

    name
}
