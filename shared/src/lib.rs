//! Shared domain core for the Farm Operations Dashboard
//!
//! This crate contains the simulated-dataset models, the synthetic data
//! generation engine, and the pure analytics computations shared between the
//! backend and other consumers of the generated data.

pub mod analytics;
pub mod forecast;
pub mod models;
pub mod simulation;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
