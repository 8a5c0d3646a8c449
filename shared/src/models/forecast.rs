//! Harvest forecast models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Projected harvest for one future day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub harvested_kg: f64,
}

/// Linear projection of daily harvest beyond a cut-off date
///
/// `points` is empty when fewer than two history rows were available to fit
/// the trend line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarvestForecast {
    /// Number of history rows the trend line was fitted on
    pub history_days: usize,
    pub slope_kg_per_day: f64,
    pub points: Vec<ForecastPoint>,
}
