//! Economic stage: costs, revenue and profit

use rand::rngs::StdRng;
use rand::Rng;

use super::conditions::DerivedConditions;
use super::round2;

/// Per-day monetary outcomes, column oriented
#[derive(Debug, Clone)]
pub struct EconomicOutcome {
    pub production_cost: Vec<f64>,
    pub irrigation_cost: Vec<f64>,
    pub estimated_profit: Vec<f64>,
}

/// Derive costs and profit from the harvested quantities.
///
/// Cost rates and the sale price fluctuate day by day: production runs
/// 0.40-1.20 per kg (labour, fertiliser, treatments), irrigation water
/// 0.10-0.30 per mm, and the sale price 1.50-3.00 per kg.
pub fn compute(
    harvested_kg: &[f64],
    conditions: &DerivedConditions,
    rng: &mut StdRng,
) -> EconomicOutcome {
    let production_cost: Vec<f64> = harvested_kg
        .iter()
        .map(|kg| round2(rng.random_range(0.40..1.20) * kg))
        .collect();

    let irrigation_cost: Vec<f64> = conditions
        .irrigation_mm
        .iter()
        .map(|mm| round2(mm * rng.random_range(0.1..0.3)))
        .collect();

    // The sale price itself is not stored; only the resulting profit is.
    let estimated_profit: Vec<f64> = harvested_kg
        .iter()
        .enumerate()
        .map(|(i, kg)| {
            let revenue = kg * rng.random_range(1.5..3.0);
            round2(revenue - (production_cost[i] + irrigation_cost[i]))
        })
        .collect();

    EconomicOutcome {
        production_cost,
        irrigation_cost,
        estimated_profit,
    }
}
