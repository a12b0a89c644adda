use crate::domain::{AncestorChain, CommitRef, LocalChanges, NO_CHANGES};
use crate::error::{GitVersionerError, Result};
use crate::git::HistoryProvider;

/// One commit of an in-memory history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCommit {
    pub sha1: String,
    pub parent: Option<String>,
    pub date: i64,
}

impl MockCommit {
    pub fn new(sha1: impl Into<String>, parent: Option<&str>, date: i64) -> Self {
        MockCommit {
            sha1: sha1.into(),
            parent: parent.map(str::to_string),
            date,
        }
    }
}

/// In-memory commit graph with branches, for testing without a git checkout
pub struct MockHistory {
    graph: Vec<MockCommit>,
    head: Option<String>,
    branch_heads: Vec<(String, String)>,
    local_changes: LocalChanges,
    shallow: bool,
    working: bool,
}

impl MockHistory {
    /// Create a history from its commits, without HEAD or branches
    pub fn new(graph: Vec<MockCommit>) -> Self {
        MockHistory {
            graph,
            head: None,
            branch_heads: Vec::new(),
            local_changes: NO_CHANGES,
            shallow: false,
            working: true,
        }
    }

    /// Check out a commit (detached unless a branch points to it)
    pub fn with_head(mut self, sha1: impl Into<String>) -> Self {
        self.head = Some(sha1.into());
        self
    }

    /// Point a branch at a commit. When several branches point at HEAD the
    /// first one added is reported as the current branch.
    pub fn with_branch(mut self, sha1: impl Into<String>, name: impl Into<String>) -> Self {
        self.branch_heads.push((sha1.into(), name.into()));
        self
    }

    pub fn with_local_changes(mut self, changes: LocalChanges) -> Self {
        self.local_changes = changes;
        self
    }

    pub fn shallow(mut self) -> Self {
        self.shallow = true;
        self
    }

    pub fn not_a_repository(mut self) -> Self {
        self.working = false;
        self
    }

    fn commit_in_graph(&self, rev: &str) -> Option<&MockCommit> {
        if let Some(commit) = self.graph.iter().find(|c| c.sha1 == rev) {
            return Some(commit);
        }

        // rev is a branch name
        let sha1 = self.branch_to_sha1(rev)?;
        self.graph.iter().find(|c| c.sha1 == sha1)
    }

    fn branch_to_sha1(&self, name: &str) -> Option<&str> {
        self.branch_heads
            .iter()
            .find(|(_, branch)| branch == name)
            .map(|(sha1, _)| sha1.as_str())
    }

    fn sha1_to_branch(&self, sha1: &str) -> Option<&str> {
        self.branch_heads
            .iter()
            .find(|(head, _)| head == sha1)
            .map(|(_, branch)| branch.as_str())
    }

    fn parent_of(&self, commit: &MockCommit) -> Result<Option<&MockCommit>> {
        match &commit.parent {
            None => Ok(None),
            Some(parent) => match self.graph.iter().find(|c| &c.sha1 == parent) {
                Some(found) => Ok(Some(found)),
                // shallow clones cut the history at unknown parents
                None if self.shallow => Ok(None),
                None => Err(GitVersionerError::missing_commit(parent.clone())),
            },
        }
    }
}

impl HistoryProvider for MockHistory {
    fn resolve(&self, reference: &str) -> Result<Option<CommitRef>> {
        Ok(self
            .commit_in_graph(reference)
            .map(|c| CommitRef::new(c.sha1.clone())))
    }

    fn ancestor_chain(&self, reference: &str) -> Result<Option<AncestorChain>> {
        let Some(mut commit) = self.commit_in_graph(reference) else {
            return Ok(None);
        };

        let mut history = vec![CommitRef::new(commit.sha1.clone())];
        while let Some(parent) = self.parent_of(commit)? {
            // a longer chain than the graph means a parent cycle
            if history.len() > self.graph.len() {
                return Err(GitVersionerError::missing_commit(parent.sha1.clone()));
            }
            history.push(CommitRef::new(parent.sha1.clone()));
            commit = parent;
        }

        Ok(AncestorChain::new(history))
    }

    fn timestamp(&self, reference: &str) -> Result<i64> {
        self.commit_in_graph(reference)
            .map(|c| c.date)
            .ok_or_else(|| GitVersionerError::missing_commit(reference))
    }

    fn current_head(&self) -> Result<Option<CommitRef>> {
        match &self.head {
            None => Ok(None),
            Some(head) => self
                .resolve(head)?
                .map(Some)
                .ok_or_else(|| GitVersionerError::missing_commit(head.clone())),
        }
    }

    fn current_branch_name(&self) -> Result<Option<String>> {
        let Some(head) = self.current_head()? else {
            return Ok(None);
        };
        Ok(self.sha1_to_branch(head.as_str()).map(str::to_string))
    }

    fn local_changes(&self) -> Result<LocalChanges> {
        Ok(self.local_changes)
    }

    fn is_working_repository(&self) -> Result<bool> {
        if !self.working {
            return Ok(false);
        }
        Ok(self.current_head()?.is_some())
    }

    fn is_shallow_history(&self) -> bool {
        self.shallow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear() -> MockHistory {
        MockHistory::new(vec![
            MockCommit::new("c", Some("b"), 300),
            MockCommit::new("b", Some("a"), 200),
            MockCommit::new("a", None, 100),
        ])
    }

    #[test]
    fn test_ancestor_chain_walks_to_root() {
        let history = linear().with_head("c");
        let chain = history.ancestor_chain("c").unwrap().unwrap();
        let ids: Vec<&str> = chain.iter().map(CommitRef::as_str).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_branch_names_resolve() {
        let history = linear().with_head("c").with_branch("b", "main");
        assert_eq!(history.resolve("main").unwrap(), Some(CommitRef::new("b")));
        assert_eq!(history.resolve("develop").unwrap(), None);
        assert_eq!(history.timestamp("main").unwrap(), 200);
    }

    #[test]
    fn test_detached_head_has_no_branch() {
        let history = linear().with_head("c").with_branch("b", "main");
        assert_eq!(history.current_branch_name().unwrap(), None);
    }

    #[test]
    fn test_unknown_parent_is_an_error() {
        let history = MockHistory::new(vec![MockCommit::new("x", Some("gone"), 1)]).with_head("x");
        assert!(history.ancestor_chain("x").is_err());
    }

    #[test]
    fn test_shallow_history_stops_at_unknown_parent() {
        let history = MockHistory::new(vec![MockCommit::new("x", Some("gone"), 1)])
            .with_head("x")
            .shallow();
        assert_eq!(history.ancestor_chain("x").unwrap().unwrap().len(), 1);
        assert!(history.is_shallow_history());
    }

    #[test]
    fn test_missing_head_is_not_working() {
        assert!(!linear().is_working_repository().unwrap());
        assert!(linear().with_head("c").is_working_repository().unwrap());
        assert!(!linear()
            .with_head("c")
            .not_a_repository()
            .is_working_repository()
            .unwrap());
    }

    #[test]
    fn test_dangling_head_is_an_error() {
        let history = linear().with_head("gone");
        assert!(history.is_working_repository().is_err());
    }
}
