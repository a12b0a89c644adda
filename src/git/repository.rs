use crate::domain::{AncestorChain, CommitRef, LocalChanges};
use crate::error::{GitVersionerError, Result};
use crate::git::HistoryProvider;
use git2::{DiffOptions, ErrorCode, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// History provider backed by a git checkout through `git2`
pub struct Git2History {
    repo: Option<Git2Repo>,
}

impl Git2History {
    /// Open the repository containing `path`.
    ///
    /// A directory outside of any repository is not an error here: the
    /// provider then reports `is_working_repository() == Ok(false)` and the
    /// caller falls back to the default version. Any other failure to open
    /// the repository (permissions, a corrupt `.git`) is returned.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Git2Repo::discover(path.as_ref()) {
            Ok(repo) => Ok(Git2History { repo: Some(repo) }),
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(path = %path.as_ref().display(), error = %e, "no git repository found");
                Ok(Git2History { repo: None })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn repo(&self) -> Result<&Git2Repo> {
        self.repo
            .as_ref()
            .ok_or_else(|| GitVersionerError::Git(git2::Error::from_str("not a git repository")))
    }

    fn resolve_oid(&self, reference: &str) -> Result<Option<Oid>> {
        let repo = self.repo()?;

        let object = match repo.revparse_single(reference) {
            Ok(object) => object,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match object.peel_to_commit() {
            Ok(commit) => Ok(Some(commit.id())),
            // points at a tree or blob, never a commit
            Err(e) if is_not_found(&e) || e.code() == ErrorCode::Peel => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_not_found(e: &git2::Error) -> bool {
    matches!(
        e.code(),
        ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::UnbornBranch
    )
}

impl HistoryProvider for Git2History {
    fn resolve(&self, reference: &str) -> Result<Option<CommitRef>> {
        Ok(self
            .resolve_oid(reference)?
            .map(|oid| CommitRef::new(oid.to_string())))
    }

    fn ancestor_chain(&self, reference: &str) -> Result<Option<AncestorChain>> {
        let Some(oid) = self.resolve_oid(reference)? else {
            return Ok(None);
        };

        let mut revwalk = self.repo()?.revwalk()?;
        revwalk.push(oid)?;
        revwalk.simplify_first_parent()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            commits.push(CommitRef::new(oid_result?.to_string()));
        }

        Ok(AncestorChain::new(commits))
    }

    fn timestamp(&self, reference: &str) -> Result<i64> {
        let oid = self
            .resolve_oid(reference)?
            .ok_or_else(|| GitVersionerError::missing_commit(reference))?;
        let commit = self.repo()?.find_commit(oid)?;
        Ok(commit.time().seconds())
    }

    fn current_head(&self) -> Result<Option<CommitRef>> {
        let head = match self.repo()?.head() {
            Ok(head) => head,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let commit = head.peel_to_commit()?;
        Ok(Some(CommitRef::new(commit.id().to_string())))
    }

    fn current_branch_name(&self) -> Result<Option<String>> {
        let head = match self.repo()?.head() {
            Ok(head) => head,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }
        Ok(head.shorthand().map(str::to_string))
    }

    fn local_changes(&self) -> Result<LocalChanges> {
        let repo = self.repo()?;

        let head_tree = match repo.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(e) if is_not_found(&e) => None,
            Err(e) => return Err(e.into()),
        };

        let mut diff_opts = DiffOptions::new();
        diff_opts.include_untracked(false);

        let diff = repo.diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut diff_opts))?;
        let stats = diff.stats()?;

        Ok(LocalChanges::new(
            stats.files_changed() as u64,
            stats.insertions() as u64,
            stats.deletions() as u64,
        ))
    }

    fn is_working_repository(&self) -> Result<bool> {
        match &self.repo {
            Some(repo) if !repo.is_bare() => Ok(self.current_head()?.is_some()),
            _ => Ok(false),
        }
    }

    fn is_shallow_history(&self) -> bool {
        self.repo.as_ref().is_some_and(|repo| repo.is_shallow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_repository_is_not_working() {
        let dir = tempfile::TempDir::new().unwrap();
        let history = Git2History::discover(dir.path()).unwrap();
        // the temp dir may itself live inside a checkout; only assert when it does not
        if history.repo.is_none() {
            assert!(!history.is_working_repository().unwrap());
            assert!(!history.is_shallow_history());
            assert!(history.current_head().is_err());
        }
    }

    #[test]
    fn test_unborn_head_is_not_working() {
        let dir = tempfile::TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let history = Git2History::discover(dir.path()).unwrap();
        assert!(!history.is_working_repository().unwrap());
        assert_eq!(history.current_head().unwrap(), None);
        assert_eq!(history.current_branch_name().unwrap(), None);
    }

    #[test]
    fn test_bare_repository_is_not_working() {
        let dir = tempfile::TempDir::new().unwrap();
        Git2Repo::init_bare(dir.path()).unwrap();
        let history = Git2History::discover(dir.path()).unwrap();
        assert!(!history.is_working_repository().unwrap());
    }
}
