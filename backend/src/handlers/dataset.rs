//! HTTP handlers for dataset generation and access

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::models::{DailyRecord, DatasetMeta, TabularDataset};
use shared::types::{DateRange, RecordFilter, ValueRange};
use shared::validation::{validate_date_range, validate_value_range};

use crate::error::{AppError, AppResult};
use crate::services::dataset::DatasetService;
use crate::AppState;

/// Request body for dataset generation
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    /// Reproducible seed; omitted means time-derived
    pub seed: Option<u64>,
}

/// Generate and publish a new dataset, replacing the current one
pub async fn generate_dataset(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<Json<DatasetMeta>> {
    let service = DatasetService::new(&state);
    let meta = service.regenerate(input.seed)?;
    tracing::info!(seed = meta.seed, id = %meta.id, "Dataset regenerated");
    Ok(Json(meta))
}

/// Get metadata of the current dataset
pub async fn get_dataset_meta(State(state): State<AppState>) -> AppResult<Json<DatasetMeta>> {
    let service = DatasetService::new(&state);
    let meta = service.meta()?;
    Ok(Json(meta))
}

/// Query parameters for filtered record access
#[derive(Debug, Default, Deserialize)]
pub struct RecordQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub soil_quality_min: Option<f64>,
    pub soil_quality_max: Option<f64>,
}

impl RecordQuery {
    /// Turn the raw query parameters into a validated filter
    pub(crate) fn into_filter(self) -> AppResult<RecordFilter> {
        let dates = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                let range = DateRange::new(start, end);
                validate_date_range(&range).map_err(|msg| {
                    AppError::validation(
                        "start_date",
                        msg,
                        "L'inizio dell'intervallo di date non può seguire la fine",
                    )
                })?;
                Some(range)
            }
            (None, None) => None,
            _ => {
                return Err(AppError::validation(
                    "start_date",
                    "start_date and end_date must be provided together",
                    "start_date e end_date devono essere indicati insieme",
                ))
            }
        };

        let soil_quality = match (self.soil_quality_min, self.soil_quality_max) {
            (Some(min), Some(max)) => {
                let range = ValueRange::new(min, max);
                validate_value_range(&range).map_err(|msg| {
                    AppError::validation(
                        "soil_quality_min",
                        msg,
                        "Il minimo dell'intervallo non può superare il massimo",
                    )
                })?;
                Some(range)
            }
            (None, None) => None,
            _ => {
                return Err(AppError::validation(
                    "soil_quality_min",
                    "soil_quality_min and soil_quality_max must be provided together",
                    "soil_quality_min e soil_quality_max devono essere indicati insieme",
                ))
            }
        };

        Ok(RecordFilter {
            dates,
            soil_quality,
        })
    }
}

/// Get the current dataset's records matching the filter
pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> AppResult<Json<Vec<DailyRecord>>> {
    let filter = query.into_filter()?;
    let service = DatasetService::new(&state);
    let records = service.records(&filter)?;
    Ok(Json(records))
}

/// Get the current dataset in row-oriented tabular form
pub async fn get_dataset_table(State(state): State<AppState>) -> AppResult<Json<TabularDataset>> {
    let service = DatasetService::new(&state);
    let table = service.table()?;
    Ok(Json(table))
}
