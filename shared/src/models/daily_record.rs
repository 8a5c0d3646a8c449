//! Daily operating record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Operational status derived from a day's conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertStatus {
    #[serde(rename = "OK")]
    Ok,
    Attention,
}

impl AlertStatus {
    pub fn is_attention(&self) -> bool {
        matches!(self, AlertStatus::Attention)
    }
}

/// One simulated day of farm operating data
///
/// Continuous fields are rounded to 0.1, monetary fields to 0.01.
/// `estimated_profit` is the only monetary value that may be negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub precipitation_mm: f64,
    pub sunlight_h: f64,
    pub soil_quality_pct: f64,
    pub soil_ph: f64,
    pub wind_speed_ms: f64,
    pub irrigation_mm: f64,
    pub harvested_kg: f64,
    pub production_cost: f64,
    pub irrigation_cost: f64,
    pub estimated_profit: f64,
    pub alert_status: AlertStatus,
}
