//! Business services for the Farm Operations Dashboard

pub mod analytics;
pub mod dataset;
pub mod forecast;
