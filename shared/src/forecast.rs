//! Harvest trend forecast
//!
//! Fits an ordinary least-squares line through (day ordinal, harvested kg)
//! of the history up to a cut-off date and projects it over the following
//! days. A crude model, but the one the dashboard's forecast tab renders.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{DailyRecord, ForecastPoint, HarvestForecast};

/// Days projected beyond the cut-off when the caller does not ask otherwise
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Project daily harvest beyond `end_date`.
///
/// Fewer than two history rows, or a degenerate fit, yield an empty
/// projection rather than an error.
pub fn harvest_forecast(
    records: &[DailyRecord],
    end_date: NaiveDate,
    horizon_days: u32,
) -> HarvestForecast {
    let history: Vec<&DailyRecord> = records.iter().filter(|r| r.date <= end_date).collect();
    let history_days = history.len();
    if history_days < 2 {
        return HarvestForecast {
            history_days,
            slope_kg_per_day: 0.0,
            points: Vec::new(),
        };
    }

    let n = history_days as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for record in &history {
        let x = f64::from(record.date.num_days_from_ce());
        let y = record.harvested_kg;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        // all history on one date; nothing to extrapolate
        return HarvestForecast {
            history_days,
            slope_kg_per_day: 0.0,
            points: Vec::new(),
        };
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let points = (1..=i64::from(horizon_days))
        .map(|offset| {
            let date = end_date + Duration::days(offset);
            let x = f64::from(date.num_days_from_ce());
            ForecastPoint {
                date,
                harvested_kg: slope * x + intercept,
            }
        })
        .collect();

    HarvestForecast {
        history_days,
        slope_kg_per_day: slope,
        points,
    }
}
