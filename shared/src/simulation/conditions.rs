//! Derived-condition stage: irrigation, extreme events, alert status

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::Rng;

use super::calendar::CalendarDay;
use super::fields::FieldSamples;
use super::round1;
use crate::models::AlertStatus;

/// Months in which dry days trigger irrigation
const IRRIGATION_SEASON: RangeInclusive<u32> = 6..=9;

/// Below this daily rainfall a day counts as dry
const DRY_DAY_PRECIPITATION_MM: f64 = 3.0;

/// Per-day derived conditions, column oriented
#[derive(Debug, Clone)]
pub struct DerivedConditions {
    pub irrigation_mm: Vec<f64>,
    pub extreme_event: Vec<bool>,
    pub alert_status: Vec<AlertStatus>,
}

/// Evaluate irrigation, extreme-event flags and alert status for every day
pub fn evaluate(
    calendar: &[CalendarDay],
    fields: &FieldSamples,
    rng: &mut StdRng,
) -> DerivedConditions {
    // The volume is drawn for every day, gated or not, so the draw schedule
    // never depends on the sampled weather.
    let irrigation_mm: Vec<f64> = calendar
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let volume = rng.random_range(5.0..15.0);
            if fields.precipitation_mm[i] < DRY_DAY_PRECIPITATION_MM
                && IRRIGATION_SEASON.contains(&day.month)
            {
                round1(volume)
            } else {
                0.0
            }
        })
        .collect();

    let extreme_event: Vec<bool> = (0..calendar.len())
        .map(|i| {
            is_extreme_event(
                fields.temperature_c[i],
                fields.soil_ph[i],
                fields.wind_speed_ms[i],
            )
        })
        .collect();

    // Alert thresholds are broader than the extreme-event ones and form a
    // separate rule set on top of the flag.
    let alert_status: Vec<AlertStatus> = (0..calendar.len())
        .map(|i| {
            if extreme_event[i]
                || fields.soil_quality_pct[i] < 70.0
                || fields.temperature_c[i] < 10.0
                || fields.temperature_c[i] > 35.0
                || fields.humidity_pct[i] < 45.0
            {
                AlertStatus::Attention
            } else {
                AlertStatus::Ok
            }
        })
        .collect();

    DerivedConditions {
        irrigation_mm,
        extreme_event,
        alert_status,
    }
}

/// Environmental anomaly: frost or scorching temperature, soil pH outside
/// 5.8-7.8, or wind above 8 m/s
pub fn is_extreme_event(temperature_c: f64, soil_ph: f64, wind_speed_ms: f64) -> bool {
    temperature_c < 2.0
        || temperature_c > 35.0
        || soil_ph < 5.8
        || soil_ph > 7.8
        || wind_speed_ms > 8.0
}
