//! Validation utilities for dashboard query inputs

use crate::types::{DateRange, RecordFilter, ValueRange};

/// Validate that a date range is ordered (bounds are inclusive)
pub fn validate_date_range(range: &DateRange) -> Result<(), &'static str> {
    if range.start > range.end {
        return Err("Date range start must not be after its end");
    }
    Ok(())
}

/// Validate that a numeric range is finite and ordered
pub fn validate_value_range(range: &ValueRange) -> Result<(), &'static str> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err("Range bounds must be finite numbers");
    }
    if range.min > range.max {
        return Err("Range minimum must not exceed its maximum");
    }
    Ok(())
}

/// Validate a record filter's present criteria
pub fn validate_filter(filter: &RecordFilter) -> Result<(), &'static str> {
    if let Some(dates) = &filter.dates {
        validate_date_range(dates)?;
    }
    if let Some(quality) = &filter.soil_quality {
        validate_value_range(quality)?;
    }
    Ok(())
}

/// Validate a forecast horizon (1 to 365 days)
pub fn validate_forecast_horizon(days: u32) -> Result<(), &'static str> {
    if days == 0 {
        return Err("Forecast horizon must cover at least one day");
    }
    if days > 365 {
        return Err("Forecast horizon cannot exceed one year");
    }
    Ok(())
}
