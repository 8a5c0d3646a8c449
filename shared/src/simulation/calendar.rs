//! Calendar stage: consecutive dates with their seasonal indices

use chrono::{Datelike, NaiveDate};

/// One calendar day with the indices the seasonal curves and monthly rules
/// key off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// 1-366
    pub day_of_year: u32,
    /// 1-12
    pub month: u32,
}

/// Build `days` consecutive calendar days starting at `start_date`
pub fn build(start_date: NaiveDate, days: usize) -> Vec<CalendarDay> {
    start_date
        .iter_days()
        .take(days)
        .map(|date| CalendarDay {
            date,
            day_of_year: date.ordinal(),
            month: date.month(),
        })
        .collect()
}
