//! Aggregation services over the published dataset

use shared::analytics;
use shared::models::{AttentionDay, MonthlySummary, PeriodComparison, PeriodKpis};
use shared::types::{DateRange, RecordFilter};

use crate::error::AppResult;
use crate::services::dataset::DatasetStore;
use crate::AppState;

/// Analytics service
pub struct AnalyticsService {
    store: DatasetStore,
}

impl AnalyticsService {
    /// Create a new AnalyticsService instance
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// KPI figures over the filtered period
    pub fn period_kpis(&self, filter: &RecordFilter) -> AppResult<PeriodKpis> {
        let current = self.store.current()?;
        let rows = analytics::filter_records(&current.data.records, filter);
        Ok(analytics::period_kpis(&rows))
    }

    /// Per-month aggregates over the filtered period
    pub fn monthly_summary(&self, filter: &RecordFilter) -> AppResult<Vec<MonthlySummary>> {
        let current = self.store.current()?;
        let rows = analytics::filter_records(&current.data.records, filter);
        Ok(analytics::monthly_summary(&rows))
    }

    /// Harvest totals of two periods side by side
    pub fn compare_periods(
        &self,
        first: &DateRange,
        second: &DateRange,
    ) -> AppResult<PeriodComparison> {
        let current = self.store.current()?;
        Ok(analytics::compare_periods(
            &current.data.records,
            first,
            second,
        ))
    }

    /// Days flagged `Attention` within the filtered period
    pub fn attention_days(&self, filter: &RecordFilter) -> AppResult<Vec<AttentionDay>> {
        let current = self.store.current()?;
        let rows = analytics::filter_records(&current.data.records, filter);
        Ok(analytics::attention_days(&rows))
    }
}
