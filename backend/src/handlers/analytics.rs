//! HTTP handlers for analytics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::models::{AttentionDay, MonthlySummary, PeriodComparison, PeriodKpis};
use shared::types::DateRange;
use shared::validation::validate_date_range;

use crate::error::{AppError, AppResult};
use crate::services::analytics::AnalyticsService;
use crate::AppState;

use super::dataset::RecordQuery;

/// KPI figures over the filtered period
pub async fn get_period_kpis(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> AppResult<Json<PeriodKpis>> {
    let filter = query.into_filter()?;
    let service = AnalyticsService::new(&state);
    let kpis = service.period_kpis(&filter)?;
    Ok(Json(kpis))
}

/// Per-month aggregates over the filtered period
pub async fn get_monthly_summary(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> AppResult<Json<Vec<MonthlySummary>>> {
    let filter = query.into_filter()?;
    let service = AnalyticsService::new(&state);
    let summary = service.monthly_summary(&filter)?;
    Ok(Json(summary))
}

/// Query parameters for period comparison
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub first_start: NaiveDate,
    pub first_end: NaiveDate,
    pub second_start: NaiveDate,
    pub second_end: NaiveDate,
}

/// Compare harvest totals of two periods
pub async fn compare_periods(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> AppResult<Json<PeriodComparison>> {
    let first = DateRange::new(query.first_start, query.first_end);
    let second = DateRange::new(query.second_start, query.second_end);
    for (field, range) in [("first_start", &first), ("second_start", &second)] {
        validate_date_range(range).map_err(|msg| {
            AppError::validation(
                field,
                msg,
                "L'inizio dell'intervallo di date non può seguire la fine",
            )
        })?;
    }

    let service = AnalyticsService::new(&state);
    let comparison = service.compare_periods(&first, &second)?;
    Ok(Json(comparison))
}

/// List the days flagged `Attention` within the filtered period
pub async fn list_attention_days(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> AppResult<Json<Vec<AttentionDay>>> {
    let filter = query.into_filter()?;
    let service = AnalyticsService::new(&state);
    let alerts = service.attention_days(&filter)?;
    Ok(Json(alerts))
}
