//! HTTP handlers for forecast endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::forecast::DEFAULT_HORIZON_DAYS;
use shared::models::HarvestForecast;
use shared::validation::validate_forecast_horizon;

use crate::error::{AppError, AppResult};
use crate::services::forecast::ForecastService;
use crate::AppState;

/// Query parameters for the harvest forecast
#[derive(Debug, Default, Deserialize)]
pub struct ForecastQuery {
    /// Last history day the trend line is fitted on; defaults to the
    /// dataset's final day
    pub end_date: Option<NaiveDate>,
    pub horizon_days: Option<u32>,
}

/// Project daily harvest beyond the cut-off date
pub async fn get_harvest_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<HarvestForecast>> {
    let horizon_days = query.horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS);
    validate_forecast_horizon(horizon_days).map_err(|msg| {
        AppError::validation(
            "horizon_days",
            msg,
            "L'orizzonte di previsione deve essere compreso tra 1 e 365 giorni",
        )
    })?;

    let service = ForecastService::new(&state);
    let forecast = service.harvest(query.end_date, horizon_days)?;
    Ok(Json(forecast))
}
