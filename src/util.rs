use crate::error::{HeatError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Row index of `date` in the grid, Monday = 0 through Sunday = 6.
pub fn iso_weekday(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// The Monday on or before `date`. A Sunday maps to the Monday six days earlier.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(iso_weekday(date) as u64)
}

pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Earliest day of a `days`-long look-back window ending on `today`.
pub fn cutoff_date(today: NaiveDate, days: u32) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new(days.into()))
        .ok_or_else(|| HeatError::InvalidDate(format!("{days} days before {today} is out of range")))
}
