//! Synthetic data generation engine
//!
//! Produces one year of internally consistent daily operating records
//! (weather, soil, irrigation, harvest, costs, profit) from a single seeded
//! generator. The pipeline runs in a fixed order: calendar, stochastic
//! fields, derived conditions, harvest model, economic model, assembly.
//!
//! Reproducibility contract: the same seed yields a bit-identical dataset.
//! Every random draw goes through the one `StdRng` created per `generate`
//! call, field-major (the full per-day vector of a field is drawn before the
//! next field begins), in the order: temperature noise, humidity noise,
//! precipitation base, sunlight noise, soil quality, soil pH, wind speed,
//! irrigation volume, harvest random factor, rain-damage loss, production
//! cost rate, irrigation cost rate, sale price. Reordering any of these
//! changes every seeded run.

pub mod calendar;
pub mod conditions;
pub mod economics;
pub mod fields;
pub mod harvest;

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::models::{DailyRecord, Dataset};

/// Calendar window to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationParams {
    /// First simulated calendar day
    pub start_date: NaiveDate,
    /// Number of consecutive days to generate
    pub days: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date"),
            days: 365,
        }
    }
}

/// Errors the generator can report
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("requested day count must be positive")]
    EmptyCalendar,

    #[error("invalid distribution parameters: {0}")]
    Distribution(String),
}

/// Generate a complete dataset for the requested window.
///
/// With `seed` the output is fully reproducible; without it the seed is
/// derived from the current time so repeated runs differ. The generator
/// state is local to this call, so concurrent generations cannot interleave
/// draws.
pub fn generate(params: &SimulationParams, seed: Option<u64>) -> Result<Dataset, SimulationError> {
    if params.days == 0 {
        return Err(SimulationError::EmptyCalendar);
    }

    let seed = seed.unwrap_or_else(|| Utc::now().timestamp().unsigned_abs());
    let mut rng = StdRng::seed_from_u64(seed);

    let calendar = calendar::build(params.start_date, params.days);
    let fields = fields::sample(&calendar, &mut rng)?;
    let conditions = conditions::evaluate(&calendar, &fields, &mut rng);
    let harvested_kg = harvest::compute(&calendar, &fields, &conditions, &mut rng);
    let economics = economics::compute(&harvested_kg, &conditions, &mut rng);

    let records = calendar
        .iter()
        .enumerate()
        .map(|(i, day)| DailyRecord {
            date: day.date,
            temperature_c: fields.temperature_c[i],
            humidity_pct: fields.humidity_pct[i],
            precipitation_mm: fields.precipitation_mm[i],
            sunlight_h: fields.sunlight_h[i],
            soil_quality_pct: fields.soil_quality_pct[i],
            soil_ph: fields.soil_ph[i],
            wind_speed_ms: fields.wind_speed_ms[i],
            irrigation_mm: conditions.irrigation_mm[i],
            harvested_kg: harvested_kg[i],
            production_cost: economics.production_cost[i],
            irrigation_cost: economics.irrigation_cost[i],
            estimated_profit: economics.estimated_profit[i],
            alert_status: conditions.alert_status[i],
        })
        .collect();

    Ok(Dataset {
        seed,
        start_date: params.start_date,
        records,
    })
}

/// Round to one decimal place (sampled fields, quantities in mm/kg/h)
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (monetary values)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
