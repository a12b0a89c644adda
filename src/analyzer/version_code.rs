/// Seconds in a (non-leap) year, the unit the year factor is expressed in
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Default number of version code units added per year of history
pub const DEFAULT_YEAR_FACTOR: u64 = 1000;

/// Optional policy that blends elapsed history time into the version code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePolicy {
    pub enabled: bool,
    pub year_factor: u64,
}

impl Default for TimePolicy {
    fn default() -> Self {
        TimePolicy {
            enabled: false,
            year_factor: DEFAULT_YEAR_FACTOR,
        }
    }
}

impl TimePolicy {
    pub fn enabled(year_factor: u64) -> Self {
        TimePolicy {
            enabled: true,
            year_factor,
        }
    }

    /// Time component for a history spanning `root_timestamp..head_timestamp`.
    ///
    /// `elapsed * year_factor / SECONDS_PER_YEAR`, rounded half up. Zero when
    /// the policy is disabled, when either timestamp is at or before the epoch,
    /// or when the head is not younger than the root.
    pub fn time_component(&self, head_timestamp: i64, root_timestamp: i64) -> u64 {
        if !self.enabled || head_timestamp <= 0 || root_timestamp <= 0 {
            return 0;
        }
        if head_timestamp <= root_timestamp {
            return 0;
        }

        let elapsed = (head_timestamp - root_timestamp) as u128;
        let year = SECONDS_PER_YEAR as u128;
        let scaled = (elapsed * self.year_factor as u128 + year / 2) / year;
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}

/// Version code: the base branch commit count plus the time component
pub fn version_code(base_branch_commit_count: u64, time_component: u64) -> u64 {
    base_branch_commit_count.saturating_add(time_component)
}
