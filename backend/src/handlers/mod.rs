//! HTTP handlers for the Farm Operations Dashboard API

mod analytics;
mod dataset;
mod forecast;
mod health;

pub use analytics::*;
pub use dataset::*;
pub use forecast::*;
pub use health::*;
