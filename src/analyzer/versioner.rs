use crate::analyzer::counter::count_commits;
use crate::analyzer::name::{format_version_name, BranchSegment, FormatOptions, NameParts};
use crate::analyzer::origin::find_origin_commit;
use crate::analyzer::version_code::{version_code, TimePolicy};
use crate::boundary::BoundaryWarning;
use crate::domain::{AncestorChain, BranchConfig, FallbackResult, VersionOutcome, VersionResult};
use crate::error::{GitVersionerError, Result};
use crate::git::{BranchResolver, HistoryBranchSource, HistoryProvider};
use tracing::{debug, warn};

/// Derives the version of the current checkout from its history
pub struct Versioner<'a, H: HistoryProvider + ?Sized> {
    history: &'a H,
    branch_names: BranchResolver<'a>,
    time_policy: TimePolicy,
}

impl<'a, H: HistoryProvider + ?Sized> Versioner<'a, H> {
    /// Create a versioner that takes the branch name from the history itself
    pub fn new(history: &'a H) -> Self {
        Versioner {
            history,
            branch_names: BranchResolver::new().with_source(HistoryBranchSource::new(history)),
            time_policy: TimePolicy::default(),
        }
    }

    /// Replace how the current branch name is looked up
    pub fn with_branch_resolver(mut self, branch_names: BranchResolver<'a>) -> Self {
        self.branch_names = branch_names;
        self
    }

    pub fn with_time_policy(mut self, time_policy: TimePolicy) -> Self {
        self.time_policy = time_policy;
        self
    }

    /// Compute the version of the current checkout.
    ///
    /// # Returns
    /// * `Ok(VersionOutcome::Computed)` - Version derived from the history
    /// * `Ok(VersionOutcome::Fallback)` - Not a working checkout or a shallow
    ///   clone; counts would be wrong so the fixed fallback is reported
    /// * `Err` - HEAD cannot be resolved, the history has several roots, or
    ///   the repository cannot be read
    pub fn compute_version(
        &self,
        branch_config: &BranchConfig,
        options: &FormatOptions,
    ) -> Result<VersionOutcome> {
        if let Some(reason) = self.check_project_state()? {
            warn!(reason = %reason, "using fallback version");
            return Ok(VersionOutcome::Fallback(FallbackResult::new(reason)));
        }

        let head = self
            .history
            .current_head()?
            .ok_or_else(|| GitVersionerError::missing_commit("HEAD"))?;
        let current_chain = self.chain_of(head.as_str())?;

        let mut warnings = Vec::new();
        let base = self.resolve_base_branch(branch_config)?;

        let origin = match &base {
            Some((base_name, base_chain)) => find_origin_commit(&current_chain, base_chain)
                .ok_or_else(|| GitVersionerError::topology(head.as_str(), base_name.as_str()))?,
            None => {
                let warning = BoundaryWarning::UnresolvedBaseBranch {
                    candidates: branch_config.candidates().to_vec(),
                };
                warn!(%warning, "counting the whole history as base branch commits");
                warnings.push(warning);
                current_chain.head()
            }
        };

        let counts = count_commits(&current_chain, origin)
            .ok_or_else(|| GitVersionerError::missing_commit(origin.as_str()))?;
        let base_branch = base.as_ref().map(|(name, _)| name.clone());

        debug!(
            base_branch = ?base_branch,
            origin = %origin,
            base_count = counts.base_branch_commit_count,
            feature_count = counts.feature_branch_commit_count,
            "resolved origin commit"
        );

        let time_component = if self.time_policy.enabled {
            let head_ts = self.history.timestamp(head.as_str())?;
            let root_ts = self.history.timestamp(counts.initial_commit.as_str())?;
            self.time_policy.time_component(head_ts, root_ts)
        } else {
            0
        };
        let code = version_code(counts.base_branch_commit_count, time_component);

        let branch_name = self.branch_names.resolve()?;
        let local_changes = self.history.local_changes()?;

        let version_name = format_version_name(
            &NameParts {
                version_code: code,
                branch: BranchSegment::new(branch_name.as_deref(), base_branch.as_deref(), &head),
                feature_branch_commit_count: counts.feature_branch_commit_count,
                local_changes,
            },
            options,
        );

        Ok(VersionOutcome::Computed(VersionResult {
            version_code: code,
            version_name,
            base_branch_commit_count: counts.base_branch_commit_count,
            feature_branch_commit_count: counts.feature_branch_commit_count,
            origin_commit: origin.clone(),
            initial_commit: counts.initial_commit,
            current_commit: head.clone(),
            base_branch,
            branch_name,
            local_changes,
            time_component,
            year_factor: self.time_policy.year_factor,
            warnings,
        }))
    }

    /// Health checks that must pass before commits can be counted
    fn check_project_state(&self) -> Result<Option<BoundaryWarning>> {
        if !self.history.is_working_repository()? {
            return Ok(Some(BoundaryWarning::NotAWorkingRepository));
        }
        if self.history.is_shallow_history() {
            return Ok(Some(BoundaryWarning::ShallowHistory));
        }
        Ok(None)
    }

    /// First configured candidate that exists, with its history
    fn resolve_base_branch(
        &self,
        branch_config: &BranchConfig,
    ) -> Result<Option<(String, AncestorChain)>> {
        for candidate in branch_config.candidates() {
            if self.history.resolve(candidate)?.is_none() {
                debug!(candidate = %candidate, "base branch candidate does not exist");
                continue;
            }
            let chain = self.chain_of(candidate)?;
            return Ok(Some((candidate.clone(), chain)));
        }
        Ok(None)
    }

    fn chain_of(&self, reference: &str) -> Result<AncestorChain> {
        self.history
            .ancestor_chain(reference)?
            .ok_or_else(|| GitVersionerError::missing_commit(reference))
    }
}
