//! Dataset lifecycle: generation, atomic publication and filtered reads

use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use shared::analytics::filter_records;
use shared::models::{DailyRecord, Dataset, DatasetMeta, TabularDataset};
use shared::simulation::{self, SimulationParams};
use shared::types::RecordFilter;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// The currently published dataset together with its publication metadata
#[derive(Debug)]
pub struct PublishedDataset {
    pub meta: DatasetMeta,
    pub data: Dataset,
}

/// Shared handle to the current dataset.
///
/// Readers clone the inner `Arc` and keep working on the version they got;
/// regeneration swaps the whole `Arc` in a single write, so a partially
/// built dataset is never observable.
#[derive(Clone, Default)]
pub struct DatasetStore {
    current: Arc<RwLock<Option<Arc<PublishedDataset>>>>,
}

impl DatasetStore {
    /// Replace the published dataset wholesale
    pub fn publish(&self, published: PublishedDataset) -> AppResult<()> {
        let mut slot = self
            .current
            .write()
            .map_err(|_| AppError::Internal("dataset store lock poisoned".to_string()))?;
        *slot = Some(Arc::new(published));
        Ok(())
    }

    /// The currently published dataset
    pub fn current(&self) -> AppResult<Arc<PublishedDataset>> {
        let slot = self
            .current
            .read()
            .map_err(|_| AppError::Internal("dataset store lock poisoned".to_string()))?;
        slot.clone()
            .ok_or_else(|| AppError::NotFound("dataset".to_string()))
    }

    pub fn has_current(&self) -> bool {
        self.current
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

/// Dataset service for generation and record access
pub struct DatasetService {
    store: DatasetStore,
    params: SimulationParams,
}

impl DatasetService {
    /// Create a new DatasetService instance
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            params: state.config.simulation.params(),
        }
    }

    /// Generate a fresh dataset and publish it, replacing the previous one.
    ///
    /// Each call uses its own generator instance, so concurrent
    /// regenerations cannot interleave draws; the last publication wins.
    pub fn regenerate(&self, seed: Option<u64>) -> AppResult<DatasetMeta> {
        let data = simulation::generate(&self.params, seed)?;
        let meta = DatasetMeta {
            id: Uuid::new_v4(),
            seed: data.seed,
            start_date: data.start_date,
            days: data.len(),
            generated_at: Utc::now(),
        };
        self.store.publish(PublishedDataset {
            meta: meta.clone(),
            data,
        })?;
        Ok(meta)
    }

    /// Metadata of the currently published dataset
    pub fn meta(&self) -> AppResult<DatasetMeta> {
        Ok(self.store.current()?.meta.clone())
    }

    /// Records of the current dataset matching the filter, in date order
    pub fn records(&self, filter: &RecordFilter) -> AppResult<Vec<DailyRecord>> {
        let current = self.store.current()?;
        Ok(filter_records(&current.data.records, filter))
    }

    /// Row-oriented tabular form of the current dataset
    pub fn table(&self) -> AppResult<TabularDataset> {
        Ok(self.store.current()?.data.to_table())
    }
}
