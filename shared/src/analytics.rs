//! Aggregations behind the dashboard: KPI cards, monthly charts, period
//! comparison and the alert list
//!
//! All functions are pure and treat an empty input as a valid state that
//! yields zero aggregates, never an error.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::{
    AttentionDay, DailyRecord, MonthlySummary, PeriodComparison, PeriodKpis,
};
use crate::types::{DateRange, RecordFilter};

/// Apply a filter, keeping date order
pub fn filter_records(records: &[DailyRecord], filter: &RecordFilter) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Headline figures over a set of records
pub fn period_kpis(records: &[DailyRecord]) -> PeriodKpis {
    if records.is_empty() {
        return PeriodKpis::default();
    }

    let days = records.len();
    let total_harvested_kg: f64 = records.iter().map(|r| r.harvested_kg).sum();
    let total_profit: f64 = records.iter().map(|r| r.estimated_profit).sum();
    let total_production_cost: f64 = records.iter().map(|r| r.production_cost).sum();
    let total_irrigation_cost: f64 = records.iter().map(|r| r.irrigation_cost).sum();
    let total_cost = total_production_cost + total_irrigation_cost;

    let avg_cost_per_kg = if total_harvested_kg > 0.0 {
        total_cost / total_harvested_kg
    } else {
        0.0
    };

    // Revenue is reconstructed from profit plus costs; the per-day sale
    // price is not part of the dataset.
    let total_revenue = total_profit + total_cost;
    let net_margin_pct = if total_revenue != 0.0 {
        total_profit / total_revenue * 100.0
    } else {
        0.0
    };

    PeriodKpis {
        days,
        total_harvested_kg,
        total_profit,
        avg_temperature_c: mean(records.iter().map(|r| r.temperature_c), days),
        avg_precipitation_mm: mean(records.iter().map(|r| r.precipitation_mm), days),
        avg_soil_quality_pct: mean(records.iter().map(|r| r.soil_quality_pct), days),
        total_production_cost,
        total_irrigation_cost,
        avg_cost_per_kg,
        net_margin_pct,
    }
}

/// Per-month aggregates, ordered by month number
pub fn monthly_summary(records: &[DailyRecord]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<u32, Vec<&DailyRecord>> = BTreeMap::new();
    for record in records {
        by_month.entry(record.date.month()).or_default().push(record);
    }

    by_month
        .into_iter()
        .map(|(month, rows)| {
            let days = rows.len();
            let harvested_mean_kg = mean(rows.iter().map(|r| r.harvested_kg), days);
            MonthlySummary {
                month,
                days,
                harvested_mean_kg,
                harvested_std_kg: sample_std(
                    rows.iter().map(|r| r.harvested_kg),
                    harvested_mean_kg,
                    days,
                ),
                production_cost_mean: mean(rows.iter().map(|r| r.production_cost), days),
                profit_mean: mean(rows.iter().map(|r| r.estimated_profit), days),
            }
        })
        .collect()
}

/// Harvest totals of two date ranges with the percent change between them
pub fn compare_periods(
    records: &[DailyRecord],
    first: &DateRange,
    second: &DateRange,
) -> PeriodComparison {
    let total = |range: &DateRange| -> f64 {
        records
            .iter()
            .filter(|r| range.contains(r.date))
            .map(|r| r.harvested_kg)
            .sum()
    };

    let first_total_kg = total(first);
    let second_total_kg = total(second);
    let change_pct = if first_total_kg != 0.0 {
        (second_total_kg - first_total_kg) / first_total_kg * 100.0
    } else {
        0.0
    };

    PeriodComparison {
        first_total_kg,
        second_total_kg,
        change_pct,
    }
}

/// The days flagged `Attention`, with the readings shown in the alert list
pub fn attention_days(records: &[DailyRecord]) -> Vec<AttentionDay> {
    records
        .iter()
        .filter(|r| r.alert_status.is_attention())
        .map(|r| AttentionDay {
            date: r.date,
            temperature_c: r.temperature_c,
            precipitation_mm: r.precipitation_mm,
            soil_quality_pct: r.soil_quality_pct,
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Sample (n-1) standard deviation; 0 when fewer than two values
fn sample_std(values: impl Iterator<Item = f64>, mean: f64, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (count - 1) as f64).sqrt()
}
