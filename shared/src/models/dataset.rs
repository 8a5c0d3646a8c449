//! Generated dataset and its tabular interchange form

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::DailyRecord;

/// A complete generated dataset, ordered by date.
///
/// Immutable once built: regeneration always produces a new `Dataset`, it
/// never mutates an existing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Seed the records were generated from
    pub seed: u64,
    /// First simulated calendar day
    pub start_date: NaiveDate,
    pub records: Vec<DailyRecord>,
}

impl Dataset {
    /// Column order of the tabular interchange form
    pub const COLUMNS: [&'static str; 14] = [
        "date",
        "temperature_c",
        "humidity_pct",
        "precipitation_mm",
        "sunlight_h",
        "soil_quality_pct",
        "soil_ph",
        "wind_speed_ms",
        "irrigation_mm",
        "harvested_kg",
        "production_cost",
        "irrigation_cost",
        "estimated_profit",
        "alert_status",
    ];

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row-oriented form for table and export consumers, one row per day in
    /// date order with cells in `COLUMNS` order
    pub fn to_table(&self) -> TabularDataset {
        let rows = self
            .records
            .iter()
            .map(|record| {
                vec![
                    json!(record.date),
                    json!(record.temperature_c),
                    json!(record.humidity_pct),
                    json!(record.precipitation_mm),
                    json!(record.sunlight_h),
                    json!(record.soil_quality_pct),
                    json!(record.soil_ph),
                    json!(record.wind_speed_ms),
                    json!(record.irrigation_mm),
                    json!(record.harvested_kg),
                    json!(record.production_cost),
                    json!(record.irrigation_cost),
                    json!(record.estimated_profit),
                    json!(record.alert_status),
                ]
            })
            .collect();

        TabularDataset {
            columns: Self::COLUMNS.iter().map(|name| (*name).to_string()).collect(),
            rows,
        }
    }
}

/// Row-oriented tabular view of a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularDataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Publication metadata for the currently served dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub id: Uuid,
    pub seed: u64,
    pub start_date: NaiveDate,
    pub days: usize,
    pub generated_at: DateTime<Utc>,
}
