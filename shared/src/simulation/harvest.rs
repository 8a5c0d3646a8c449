//! Harvest stage: multiplicative yield model
//!
//! Daily yield is sunlight-driven base production corrected by suitability
//! factors for temperature, soil pH, wind and irrigation shortfall, scaled
//! by the month's harvest intensity.

use rand::rngs::StdRng;
use rand::Rng;

use super::calendar::CalendarDay;
use super::conditions::DerivedConditions;
use super::fields::FieldSamples;
use super::round1;

/// Kilograms per full-intensity day for an average orchard
const BASE_DAILY_SCALE_KG: f64 = 15.0;

const OPTIMAL_TEMPERATURE_C: f64 = 20.0;
const OPTIMAL_SOIL_PH: f64 = 6.5;

/// Growing-season intensity by calendar month: summer-autumn harvest,
/// reduced elsewhere, none in December
pub fn monthly_harvest_factor(month: u32) -> f64 {
    match month {
        1..=4 | 11 => 0.2,
        5 => 0.4,
        6 | 9 => 0.8,
        7 | 8 => 1.0,
        10 => 0.6,
        _ => 0.0,
    }
}

/// Deliberately unclamped: far from the optimum this goes negative and pulls
/// the whole daily product below zero, which only the final clamp cuts off.
pub fn temperature_suitability(temperature_c: f64) -> f64 {
    1.0 - (temperature_c - OPTIMAL_TEMPERATURE_C).abs() / 20.0
}

pub fn ph_suitability(soil_ph: f64) -> f64 {
    1.0 - (soil_ph - OPTIMAL_SOIL_PH).abs() / 10.0
}

fn wind_penalty(wind_speed_ms: f64) -> f64 {
    if wind_speed_ms > 6.0 {
        0.8
    } else {
        1.0
    }
}

/// A dry day that was not irrigated enough loses 30% of its yield
fn irrigation_shortfall(precipitation_mm: f64, irrigation_mm: f64) -> f64 {
    if precipitation_mm < 3.0 && irrigation_mm < 5.0 {
        0.7
    } else {
        1.0
    }
}

/// Compute the harvested quantity for every day, clamped to >= 0 and rounded
/// to 0.1 kg
pub fn compute(
    calendar: &[CalendarDay],
    fields: &FieldSamples,
    conditions: &DerivedConditions,
    rng: &mut StdRng,
) -> Vec<f64> {
    let random_factor: Vec<f64> = (0..calendar.len())
        .map(|_| rng.random_range(0.9..1.1))
        .collect();
    let rain_damage_loss: Vec<f64> = (0..calendar.len())
        .map(|_| rng.random_range(0.2..0.7))
        .collect();

    calendar
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let base = fields.sunlight_h[i]
                * temperature_suitability(fields.temperature_c[i])
                * (fields.soil_quality_pct[i] / 100.0)
                * random_factor[i]
                * BASE_DAILY_SCALE_KG
                - fields.precipitation_mm[i] * rain_damage_loss[i];

            let adjusted = base
                * ph_suitability(fields.soil_ph[i])
                * wind_penalty(fields.wind_speed_ms[i])
                * irrigation_shortfall(fields.precipitation_mm[i], conditions.irrigation_mm[i])
                * monthly_harvest_factor(day.month);

            round1(adjusted.max(0.0))
        })
        .collect()
}
