/// Ordered list of candidate base branches.
///
/// The first candidate that resolves to an existing reference becomes the
/// effective base branch for a computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchConfig {
    candidates: Vec<String>,
}

impl BranchConfig {
    /// Create a branch config from candidate names, dropping blank entries
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = candidates
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| !name.trim().is_empty())
            .collect();

        BranchConfig { candidates }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

impl Default for BranchConfig {
    fn default() -> Self {
        BranchConfig::new(["main", "master"])
    }
}

/// Final path segment of a branch name: "feature/bug_123" -> "bug_123"
pub fn branch_label(branch_name: &str) -> &str {
    match branch_name.rfind('/') {
        Some(idx) => &branch_name[idx + 1..],
        None => branch_name,
    }
}
