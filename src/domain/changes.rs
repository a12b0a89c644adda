use serde::Serialize;

/// Uncommitted working-tree changes relative to HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalChanges {
    pub files_changed: u64,
    pub additions: u64,
    pub deletions: u64,
}

/// A clean working tree
pub const NO_CHANGES: LocalChanges = LocalChanges {
    files_changed: 0,
    additions: 0,
    deletions: 0,
};

impl LocalChanges {
    pub fn new(files_changed: u64, additions: u64, deletions: u64) -> Self {
        LocalChanges {
            files_changed,
            additions,
            deletions,
        }
    }

    pub fn is_clean(&self) -> bool {
        *self == NO_CHANGES
    }

    /// Compact form used in version names: "3 +5 -7"
    pub fn compact(&self) -> String {
        format!(
            "{} +{} -{}",
            self.files_changed, self.additions, self.deletions
        )
    }

    /// Human readable summary for reports
    pub fn short_stats(&self) -> String {
        if self.is_clean() {
            "no changes".to_string()
        } else {
            format!(
                "{} files changed, {} additions(+), {} deletions(-)",
                self.files_changed, self.additions, self.deletions
            )
        }
    }
}
