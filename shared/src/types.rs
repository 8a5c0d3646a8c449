//! Common query types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DailyRecord;

/// Inclusive date range for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Inclusive numeric range for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Row filter backing the dashboard's date picker and soil-quality slider.
/// Absent criteria match every record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    pub dates: Option<DateRange>,
    pub soil_quality: Option<ValueRange>,
}

impl RecordFilter {
    pub fn matches(&self, record: &DailyRecord) -> bool {
        self.dates.map_or(true, |range| range.contains(record.date))
            && self
                .soil_quality
                .map_or(true, |range| range.contains(record.soil_quality_pct))
    }
}
