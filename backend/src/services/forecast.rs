//! Forecast service over the published dataset

use chrono::NaiveDate;

use shared::forecast;
use shared::models::HarvestForecast;

use crate::error::AppResult;
use crate::services::dataset::DatasetStore;
use crate::AppState;

/// Forecast service
pub struct ForecastService {
    store: DatasetStore,
}

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Project daily harvest beyond `end_date` (default: the dataset's last
    /// day) over the given horizon
    pub fn harvest(
        &self,
        end_date: Option<NaiveDate>,
        horizon_days: u32,
    ) -> AppResult<HarvestForecast> {
        let current = self.store.current()?;
        let records = &current.data.records;

        let end_date = end_date.or_else(|| records.last().map(|r| r.date));
        let forecast = match end_date {
            Some(end) => forecast::harvest_forecast(records, end, horizon_days),
            // an empty dataset cannot be published, but degrade gracefully
            None => HarvestForecast {
                history_days: 0,
                slope_kg_per_day: 0.0,
                points: Vec::new(),
            },
        };
        Ok(forecast)
    }
}
