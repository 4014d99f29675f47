use super::aggregate::CountByDate;
use crate::util::{month_key, monday_of_week};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::{BTreeMap, HashSet};

pub const ROWS: usize = 7;

/// Shape of the calendar: where it starts, how many week columns it spans,
/// and which columns carry a month label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub first_monday: NaiveDate,
    pub week_count: usize,
    pub month_labels: BTreeMap<usize, String>,
}

impl GridLayout {
    /// Date shown at (`row`, `week`), row 0 being Monday.
    pub fn date_at(&self, row: usize, week: usize) -> NaiveDate {
        self.first_monday + Days::new((week * 7 + row) as u64)
    }
}

/// Lay out Monday-aligned week columns from the week containing `since`
/// through the week containing `today`.
pub fn build_layout(since: NaiveDate, today: NaiveDate) -> GridLayout {
    let first_monday = monday_of_week(since);
    let span = (today - first_monday).num_days().max(0) as usize;
    let week_count = span / 7 + 1;

    let mut month_labels = BTreeMap::new();
    let mut labeled = HashSet::new();
    for week in 0..week_count {
        let week_start = first_monday + Days::new(week as u64 * 7);
        if week_start.day() <= 7 && labeled.insert(month_key(week_start)) {
            month_labels.insert(week, week_start.format("%b").to_string());
        }
    }

    GridLayout {
        first_monday,
        week_count,
        month_labels,
    }
}

/// Seven weekday rows of per-day commit counts. `None` is a blank cell:
/// a day after today or a day without commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Vec<Option<u32>>; ROWS],
}

impl Grid {
    pub fn build(layout: &GridLayout, today: NaiveDate, counts: &CountByDate) -> Self {
        let rows: [Vec<Option<u32>>; ROWS] = std::array::from_fn(|row| {
            (0..layout.week_count)
                .map(|week| {
                    let date = layout.date_at(row, week);
                    if date > today {
                        return None;
                    }
                    counts.get(&date).copied().filter(|&count| count > 0)
                })
                .collect()
        });
        Self { rows }
    }

    pub fn row(&self, row: usize) -> &[Option<u32>] {
        &self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn week_count(&self) -> usize {
        self.rows[0].len()
    }
}
