use crate::error::Result;
use crate::git::HistoryProvider;
use tracing::debug;

/// Something that may know the name of the checked out branch
pub trait BranchNameSource {
    /// Name of the current branch, `None` if this source cannot tell
    fn branch_name(&self) -> Result<Option<String>>;
}

/// Asks the repository itself which branch HEAD points to
pub struct HistoryBranchSource<'a, H: HistoryProvider + ?Sized> {
    history: &'a H,
}

impl<'a, H: HistoryProvider + ?Sized> HistoryBranchSource<'a, H> {
    pub fn new(history: &'a H) -> Self {
        HistoryBranchSource { history }
    }
}

impl<H: HistoryProvider + ?Sized> BranchNameSource for HistoryBranchSource<'_, H> {
    fn branch_name(&self) -> Result<Option<String>> {
        self.history.current_branch_name()
    }
}

/// Reads the branch name from environment variables, in order.
///
/// CI systems usually check out a bare commit and publish the source branch in
/// a variable instead. A leading `refs/heads/` is stripped from the value.
#[derive(Debug, Clone, Default)]
pub struct EnvBranchSource {
    vars: Vec<String>,
}

impl EnvBranchSource {
    pub fn new<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnvBranchSource {
            vars: vars.into_iter().map(Into::into).collect(),
        }
    }
}

impl BranchNameSource for EnvBranchSource {
    fn branch_name(&self) -> Result<Option<String>> {
        for var in &self.vars {
            if let Ok(value) = std::env::var(var) {
                let value = value.trim();
                let value = value.strip_prefix("refs/heads/").unwrap_or(value);
                if !value.is_empty() {
                    debug!(var = %var, branch = %value, "branch name taken from environment");
                    return Ok(Some(value.to_string()));
                }
            }
        }
        Ok(None)
    }
}

/// Ordered chain of branch name sources; the first non-empty answer wins
#[derive(Default)]
pub struct BranchResolver<'a> {
    sources: Vec<Box<dyn BranchNameSource + 'a>>,
}

impl<'a> BranchResolver<'a> {
    pub fn new() -> Self {
        BranchResolver {
            sources: Vec::new(),
        }
    }

    /// Append a source with lower priority than the ones already added
    pub fn with_source(mut self, source: impl BranchNameSource + 'a) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Repository HEAD first, then the given environment variables
    pub fn for_history<H: HistoryProvider + ?Sized>(history: &'a H, env_vars: &[String]) -> Self {
        BranchResolver::new()
            .with_source(HistoryBranchSource::new(history))
            .with_source(EnvBranchSource::new(env_vars.iter().cloned()))
    }

    pub fn resolve(&self) -> Result<Option<String>> {
        for source in &self.sources {
            if let Some(name) = source.branch_name()? {
                if !name.is_empty() {
                    return Ok(Some(name));
                }
            }
        }
        Ok(None)
    }
}
