use serde::Serialize;
use std::fmt;

/// Length of an abbreviated commit id, as used in version names and reports.
pub const SHORT_SHA_LEN: usize = 7;

/// Opaque commit identifier (usually a full hex object id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CommitRef(String);

impl CommitRef {
    pub fn new(id: impl Into<String>) -> Self {
        CommitRef(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First seven characters of the id, or the whole id when it is shorter
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_SHA_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitRef {
    fn from(id: &str) -> Self {
        CommitRef::new(id)
    }
}

impl From<String> for CommitRef {
    fn from(id: String) -> Self {
        CommitRef(id)
    }
}

/// First-parent history of a commit, ordered from the commit itself down to
/// the root. Each element's successor is its sole parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorChain {
    commits: Vec<CommitRef>,
}

impl AncestorChain {
    /// Build a chain from head-first commits. Returns `None` for an empty list,
    /// since an existing reference always has at least itself in its history.
    pub fn new(commits: Vec<CommitRef>) -> Option<Self> {
        if commits.is_empty() {
            None
        } else {
            Some(AncestorChain { commits })
        }
    }

    pub fn head(&self) -> &CommitRef {
        &self.commits[0]
    }

    /// The root commit (last element)
    pub fn root(&self) -> &CommitRef {
        &self.commits[self.commits.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Index of `commit` counted from the head, if it is part of this chain
    pub fn position(&self, commit: &CommitRef) -> Option<usize> {
        self.commits.iter().position(|c| c == commit)
    }

    /// Length of the chain that starts at `commit`, i.e. the number of
    /// commits from the root up to and including `commit`.
    pub fn len_from(&self, commit: &CommitRef) -> Option<usize> {
        self.position(commit).map(|idx| self.commits.len() - idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommitRef> {
        self.commits.iter()
    }
}

impl<'a> IntoIterator for &'a AncestorChain {
    type Item = &'a CommitRef;
    type IntoIter = std::slice::Iter<'a, CommitRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.commits.iter()
    }
}
