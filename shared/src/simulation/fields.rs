//! Stochastic field stage: seasonal base curves plus noise
//!
//! Each field is an annual sinusoid (or a flat base) with independent noise
//! on top, sampled field-major so the draw schedule stays fixed across runs.

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

use super::calendar::CalendarDay;
use super::{round1, SimulationError};

/// The sampled weather and soil fields, column oriented, one value per
/// calendar day
#[derive(Debug, Clone)]
pub struct FieldSamples {
    pub temperature_c: Vec<f64>,
    pub humidity_pct: Vec<f64>,
    pub precipitation_mm: Vec<f64>,
    pub sunlight_h: Vec<f64>,
    pub soil_quality_pct: Vec<f64>,
    pub soil_ph: Vec<f64>,
    pub wind_speed_ms: Vec<f64>,
}

/// Seasonal period of the base curves, fixed even in leap years
const SEASON_LENGTH_DAYS: f64 = 365.0;

/// Day-of-year offsets anchoring each annual sinusoid
const TEMPERATURE_PHASE_DAYS: f64 = 80.0;
const HUMIDITY_PHASE_DAYS: f64 = 150.0;
const PRECIPITATION_PHASE_DAYS: f64 = 110.0;
const SUNLIGHT_PHASE_DAYS: f64 = 80.0;

/// Mean of the exponential daily rainfall base, in mm
const MEAN_RAINFALL_MM: f64 = 2.0;

fn annual_cycle(day_of_year: u32, phase_days: f64) -> f64 {
    (std::f64::consts::TAU * (f64::from(day_of_year) - phase_days) / SEASON_LENGTH_DAYS).sin()
}

/// Sample all seven fields for the given calendar.
///
/// Field order here is part of the reproducibility contract documented in
/// the module root.
pub fn sample(
    calendar: &[CalendarDay],
    rng: &mut StdRng,
) -> Result<FieldSamples, SimulationError> {
    let temperature_noise = normal(0.0, 2.0)?;
    let temperature_c: Vec<f64> = calendar
        .iter()
        .map(|day| {
            let base = 16.0 + 8.0 * annual_cycle(day.day_of_year, TEMPERATURE_PHASE_DAYS);
            round1(base + temperature_noise.sample(rng))
        })
        .collect();

    let humidity_noise = normal(0.0, 5.0)?;
    let humidity_pct: Vec<f64> = calendar
        .iter()
        .map(|day| {
            let base = 60.0 + 10.0 * annual_cycle(day.day_of_year, HUMIDITY_PHASE_DAYS);
            round1((base + humidity_noise.sample(rng)).clamp(40.0, 80.0))
        })
        .collect();

    let rainfall = Exp::new(1.0 / MEAN_RAINFALL_MM)
        .map_err(|e| SimulationError::Distribution(e.to_string()))?;
    let precipitation_mm: Vec<f64> = calendar
        .iter()
        .map(|day| {
            let seasonal = 1.0 + 0.6 * annual_cycle(day.day_of_year, PRECIPITATION_PHASE_DAYS);
            round1(rainfall.sample(rng) * seasonal)
        })
        .collect();

    let sunlight_noise = normal(0.0, 1.0)?;
    let sunlight_h: Vec<f64> = calendar
        .iter()
        .map(|day| {
            let base = 7.0 + 5.0 * annual_cycle(day.day_of_year, SUNLIGHT_PHASE_DAYS);
            round1(base + sunlight_noise.sample(rng)).clamp(5.0, 12.0)
        })
        .collect();

    let soil_quality_pct: Vec<f64> = calendar
        .iter()
        .map(|_| round1(rng.random_range(70.0..100.0)))
        .collect();

    let ph_distribution = normal(6.5, 0.3)?;
    let soil_ph: Vec<f64> = calendar
        .iter()
        .map(|_| round1(ph_distribution.sample(rng)))
        .collect();

    let wind_distribution = normal(3.0, 1.0)?;
    let wind_speed_ms: Vec<f64> = calendar
        .iter()
        .map(|_| round1(wind_distribution.sample(rng)).max(0.0))
        .collect();

    Ok(FieldSamples {
        temperature_c,
        humidity_pct,
        precipitation_mm,
        sunlight_h,
        soil_quality_pct,
        soil_ph,
        wind_speed_ms,
    })
}

fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>, SimulationError> {
    Normal::new(mean, std_dev).map_err(|e| SimulationError::Distribution(e.to_string()))
}
