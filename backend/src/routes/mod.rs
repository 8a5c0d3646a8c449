//! Route definitions for the Farm Operations Dashboard API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dataset generation and access
        .nest("/dataset", dataset_routes())
        // Aggregations consumed by the dashboard
        .nest("/analytics", analytics_routes())
        // Harvest projection
        .nest("/forecast", forecast_routes())
}

/// Dataset routes
fn dataset_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dataset_meta))
        .route("/generate", post(handlers::generate_dataset))
        .route("/records", get(handlers::list_records))
        .route("/table", get(handlers::get_dataset_table))
}

/// Analytics routes
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/kpis", get(handlers::get_period_kpis))
        .route("/monthly", get(handlers::get_monthly_summary))
        .route("/compare", get(handlers::compare_periods))
        .route("/alerts", get(handlers::list_attention_days))
}

/// Forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new().route("/harvest", get(handlers::get_harvest_forecast))
}
