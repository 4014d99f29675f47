use chrono::{NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default look-back window in days.
pub const DEFAULT_DAYS: u32 = 365;

/// Everything a single run needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatConfig {
    pub repo: PathBuf,
    pub days: u32,
    pub verbosity: u8,
}

impl HeatConfig {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            days: DEFAULT_DAYS,
            verbosity: 0,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub short_hash: String,
    /// Ref decoration without the surrounding parentheses, e.g. `HEAD -> main, tag: v1`.
    pub refs: Option<String>,
}

/// Commits grouped by the calendar day they were authored on.
pub type DateBucketMap = BTreeMap<NaiveDate, Vec<CommitRecord>>;

/// Commit totals per weekday, indexed Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayTotals([u32; 7]);

impl WeekdayTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, weekday: Weekday, count: u32) {
        self.0[weekday.num_days_from_monday() as usize] += count;
    }

    /// Total for grid row `row` (0 = Monday).
    pub fn row(&self, row: usize) -> u32 {
        self.0[row]
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> &[u32; 7] {
        &self.0
    }
}

impl From<[u32; 7]> for WeekdayTotals {
    fn from(totals: [u32; 7]) -> Self {
        Self(totals)
    }
}
