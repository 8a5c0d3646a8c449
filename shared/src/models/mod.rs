//! Domain models for the Farm Operations Dashboard

mod analytics;
mod daily_record;
mod dataset;
mod forecast;

pub use analytics::*;
pub use daily_record::*;
pub use dataset::*;
pub use forecast::*;
