//! Aggregation response models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline figures for a filtered period
///
/// An empty period yields the all-zero default rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodKpis {
    pub days: usize,
    pub total_harvested_kg: f64,
    pub total_profit: f64,
    pub avg_temperature_c: f64,
    pub avg_precipitation_mm: f64,
    pub avg_soil_quality_pct: f64,
    pub total_production_cost: f64,
    pub total_irrigation_cost: f64,
    /// Total cost over total harvested kg; 0 when nothing was harvested
    pub avg_cost_per_kg: f64,
    /// Profit share of total revenue in percent; 0 when revenue is 0
    pub net_margin_pct: f64,
}

/// Per-month aggregates over a filtered period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    /// Calendar month number (1-12)
    pub month: u32,
    pub days: usize,
    pub harvested_mean_kg: f64,
    /// Sample standard deviation; 0 for single-day months
    pub harvested_std_kg: f64,
    pub production_cost_mean: f64,
    pub profit_mean: f64,
}

/// Harvest totals of two date ranges side by side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodComparison {
    pub first_total_kg: f64,
    pub second_total_kg: f64,
    /// Percent change from first to second; 0 when the first total is 0
    pub change_pct: f64,
}

/// A day flagged `Attention`, with the readings behind the flag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttentionDay {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub soil_quality_pct: f64,
}
