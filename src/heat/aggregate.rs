use crate::model::{DateBucketMap, WeekdayTotals};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub type CountByDate = BTreeMap<NaiveDate, u32>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub counts: CountByDate,
    pub weekday_totals: WeekdayTotals,
}

/// Per-day commit counts plus per-weekday totals across the whole window.
pub fn aggregate(buckets: &DateBucketMap) -> Aggregate {
    let mut counts = CountByDate::new();
    let mut weekday_totals = WeekdayTotals::new();

    for (date, commits) in buckets {
        let count = commits.len() as u32;
        counts.insert(*date, count);
        weekday_totals.add(date.weekday(), count);
    }

    Aggregate {
        counts,
        weekday_totals,
    }
}
