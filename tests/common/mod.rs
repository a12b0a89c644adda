#![allow(dead_code)]

use git2::build::CheckoutBuilder;
use git2::{Oid, Repository, Signature, Time};
use std::fs;
use tempfile::TempDir;

/// Throwaway git repository with helpers to grow a history
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        TestRepo { dir, repo }
    }

    /// Commit a one-file tree onto `branch`, returning the new commit id
    pub fn commit(&self, branch: &str, parent: Option<Oid>, content: &str, time: i64) -> Oid {
        let blob = self
            .repo
            .blob(content.as_bytes())
            .expect("Could not write blob");
        let mut builder = self.repo.treebuilder(None).expect("Could not get treebuilder");
        builder
            .insert("README.md", blob, 0o100644)
            .expect("Could not insert file");
        let tree_id = builder.write().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let sig = Signature::new("Test User", "test@example.com", &Time::new(time, 0))
            .expect("Could not create signature");

        let parents: Vec<git2::Commit> = parent
            .map(|oid| self.repo.find_commit(oid).expect("Could not find parent"))
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        self.repo
            .commit(
                Some(&format!("refs/heads/{}", branch)),
                &sig,
                &sig,
                content,
                &tree,
                &parent_refs,
            )
            .expect("Could not create commit")
    }

    /// Merge commit on `branch`; the first parent is followed when counting
    pub fn merge(&self, branch: &str, parents: &[Oid], time: i64) -> Oid {
        let first = self.repo.find_commit(parents[0]).expect("Could not find parent");
        let tree = first.tree().expect("Could not get tree");
        let sig = Signature::new("Test User", "test@example.com", &Time::new(time, 0))
            .expect("Could not create signature");

        let commits: Vec<git2::Commit> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("Could not find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit> = commits.iter().collect();

        self.repo
            .commit(
                Some(&format!("refs/heads/{}", branch)),
                &sig,
                &sig,
                "Merge",
                &tree,
                &parent_refs,
            )
            .expect("Could not create merge commit")
    }

    /// Append `count` commits to `branch` starting from `parent`
    pub fn commits(
        &self,
        branch: &str,
        mut parent: Option<Oid>,
        count: usize,
        start_time: i64,
    ) -> Vec<Oid> {
        let mut oids = Vec::new();
        for i in 0..count {
            let oid = self.commit(
                branch,
                parent,
                &format!("{} {}\n", branch, i),
                start_time + (i as i64) * 1000,
            );
            oids.push(oid);
            parent = Some(oid);
        }
        oids
    }

    pub fn checkout(&self, branch: &str) {
        self.repo
            .set_head(&format!("refs/heads/{}", branch))
            .expect("Could not set HEAD");
        self.repo
            .checkout_head(Some(CheckoutBuilder::new().force()))
            .expect("Could not checkout");
    }

    pub fn detach(&self, oid: Oid) {
        self.repo.set_head_detached(oid).expect("Could not detach HEAD");
        self.repo
            .checkout_head(Some(CheckoutBuilder::new().force()))
            .expect("Could not checkout");
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Could not write file");
    }

    /// Mark the repository as a shallow clone cut at `oid`
    pub fn mark_shallow(&self, oid: Oid) {
        fs::write(self.repo.path().join("shallow"), format!("{}\n", oid))
            .expect("Could not write shallow file");
    }
}
