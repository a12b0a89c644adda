use thiserror::Error;

/// Unified error type for git-versioner operations
#[derive(Error, Debug)]
pub enum GitVersionerError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot resolve commit '{0}'")]
    MissingCommit(String),

    #[error(
        "No common ancestor between '{head}' and base branch '{base_branch}' \
         (history with multiple roots is not supported)"
    )]
    Topology { head: String, base_branch: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results in git-versioner
pub type Result<T> = std::result::Result<T, GitVersionerError>;

impl GitVersionerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitVersionerError::Config(msg.into())
    }

    /// Create an error for a reference that cannot be resolved
    pub fn missing_commit(reference: impl Into<String>) -> Self {
        GitVersionerError::MissingCommit(reference.into())
    }

    /// Create an error for two histories without a shared commit
    pub fn topology(head: impl Into<String>, base_branch: impl Into<String>) -> Self {
        GitVersionerError::Topology {
            head: head.into(),
            base_branch: base_branch.into(),
        }
    }
}
