//! Aggregation and forecast tests

use approx::assert_relative_eq;
use chrono::NaiveDate;

use shared::analytics::{
    attention_days, compare_periods, filter_records, monthly_summary, period_kpis,
};
use shared::forecast::{harvest_forecast, DEFAULT_HORIZON_DAYS};
use shared::models::{AlertStatus, DailyRecord, PeriodKpis};
use shared::types::{DateRange, RecordFilter, ValueRange};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A calm, profitable baseline day; tests override what they exercise
fn record(on: NaiveDate) -> DailyRecord {
    DailyRecord {
        date: on,
        temperature_c: 20.0,
        humidity_pct: 60.0,
        precipitation_mm: 1.0,
        sunlight_h: 8.0,
        soil_quality_pct: 85.0,
        soil_ph: 6.5,
        wind_speed_ms: 3.0,
        irrigation_mm: 0.0,
        harvested_kg: 10.0,
        production_cost: 5.0,
        irrigation_cost: 0.0,
        estimated_profit: 15.0,
        alert_status: AlertStatus::Ok,
    }
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn filter_by_date_range_and_quality() {
    let records = vec![
        DailyRecord {
            soil_quality_pct: 72.0,
            ..record(date(2024, 1, 1))
        },
        DailyRecord {
            soil_quality_pct: 95.0,
            ..record(date(2024, 1, 2))
        },
        DailyRecord {
            soil_quality_pct: 95.0,
            ..record(date(2024, 2, 1))
        },
    ];

    let filter = RecordFilter {
        dates: Some(DateRange::new(date(2024, 1, 1), date(2024, 1, 31))),
        soil_quality: Some(ValueRange::new(90.0, 100.0)),
    };

    let kept = filter_records(&records, &filter);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].date, date(2024, 1, 2));
}

#[test]
fn default_filter_keeps_everything() {
    let records = vec![record(date(2024, 1, 1)), record(date(2024, 6, 1))];
    assert_eq!(
        filter_records(&records, &RecordFilter::default()).len(),
        2
    );
}

// ============================================================================
// Period KPIs
// ============================================================================

#[test]
fn empty_period_yields_zero_kpis() {
    assert_eq!(period_kpis(&[]), PeriodKpis::default());
}

#[test]
fn kpi_totals_means_and_derived_figures() {
    let records = vec![
        DailyRecord {
            harvested_kg: 10.0,
            estimated_profit: 10.0,
            production_cost: 4.0,
            irrigation_cost: 1.0,
            temperature_c: 18.0,
            ..record(date(2024, 7, 1))
        },
        DailyRecord {
            harvested_kg: 30.0,
            estimated_profit: 20.0,
            production_cost: 4.0,
            irrigation_cost: 1.0,
            temperature_c: 22.0,
            ..record(date(2024, 7, 2))
        },
    ];

    let kpis = period_kpis(&records);
    assert_eq!(kpis.days, 2);
    assert_relative_eq!(kpis.total_harvested_kg, 40.0);
    assert_relative_eq!(kpis.total_profit, 30.0);
    assert_relative_eq!(kpis.avg_temperature_c, 20.0);
    assert_relative_eq!(kpis.total_production_cost, 8.0);
    assert_relative_eq!(kpis.total_irrigation_cost, 2.0);
    // 10 cost over 40 kg
    assert_relative_eq!(kpis.avg_cost_per_kg, 0.25);
    // revenue 40, profit 30
    assert_relative_eq!(kpis.net_margin_pct, 75.0);
}

#[test]
fn kpi_division_guards() {
    let records = vec![DailyRecord {
        harvested_kg: 0.0,
        estimated_profit: 0.0,
        production_cost: 0.0,
        irrigation_cost: 0.0,
        ..record(date(2024, 12, 1))
    }];

    let kpis = period_kpis(&records);
    assert_eq!(kpis.days, 1);
    assert_relative_eq!(kpis.avg_cost_per_kg, 0.0);
    assert_relative_eq!(kpis.net_margin_pct, 0.0);
}

// ============================================================================
// Monthly summary
// ============================================================================

#[test]
fn monthly_summary_groups_by_month_in_order() {
    let records = vec![
        DailyRecord {
            harvested_kg: 10.0,
            ..record(date(2024, 1, 1))
        },
        DailyRecord {
            harvested_kg: 20.0,
            ..record(date(2024, 1, 2))
        },
        DailyRecord {
            harvested_kg: 5.0,
            ..record(date(2024, 3, 1))
        },
    ];

    let summary = monthly_summary(&records);
    assert_eq!(summary.len(), 2);

    assert_eq!(summary[0].month, 1);
    assert_eq!(summary[0].days, 2);
    assert_relative_eq!(summary[0].harvested_mean_kg, 15.0);
    // sample std of {10, 20}
    assert_relative_eq!(
        summary[0].harvested_std_kg,
        50.0_f64.sqrt(),
        epsilon = 1e-9
    );

    assert_eq!(summary[1].month, 3);
    assert_eq!(summary[1].days, 1);
    // single-day month: no spread to report
    assert_relative_eq!(summary[1].harvested_std_kg, 0.0);
}

#[test]
fn monthly_summary_of_nothing_is_empty() {
    assert!(monthly_summary(&[]).is_empty());
}

// ============================================================================
// Period comparison
// ============================================================================

#[test]
fn comparison_reports_percent_change() {
    let records = vec![
        DailyRecord {
            harvested_kg: 10.0,
            ..record(date(2024, 5, 1))
        },
        DailyRecord {
            harvested_kg: 15.0,
            ..record(date(2024, 6, 1))
        },
    ];

    let comparison = compare_periods(
        &records,
        &DateRange::new(date(2024, 5, 1), date(2024, 5, 31)),
        &DateRange::new(date(2024, 6, 1), date(2024, 6, 30)),
    );

    assert_relative_eq!(comparison.first_total_kg, 10.0);
    assert_relative_eq!(comparison.second_total_kg, 15.0);
    assert_relative_eq!(comparison.change_pct, 50.0);
}

#[test]
fn comparison_with_empty_first_period_reports_zero_change() {
    let records = vec![DailyRecord {
        harvested_kg: 15.0,
        ..record(date(2024, 6, 1))
    }];

    let comparison = compare_periods(
        &records,
        &DateRange::new(date(2024, 1, 1), date(2024, 1, 31)),
        &DateRange::new(date(2024, 6, 1), date(2024, 6, 30)),
    );

    assert_relative_eq!(comparison.first_total_kg, 0.0);
    assert_relative_eq!(comparison.change_pct, 0.0);
}

// ============================================================================
// Attention days
// ============================================================================

#[test]
fn attention_days_lists_only_flagged_rows() {
    let records = vec![
        record(date(2024, 1, 1)),
        DailyRecord {
            alert_status: AlertStatus::Attention,
            temperature_c: 38.0,
            ..record(date(2024, 8, 1))
        },
    ];

    let alerts = attention_days(&records);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].date, date(2024, 8, 1));
    assert_relative_eq!(alerts[0].temperature_c, 38.0);
}

// ============================================================================
// Forecast
// ============================================================================

#[test]
fn forecast_continues_a_linear_trend() {
    let records: Vec<DailyRecord> = (0..10)
        .map(|i| DailyRecord {
            harvested_kg: 5.0 + 2.0 * f64::from(i),
            ..record(date(2024, 7, 1) + chrono::Duration::days(i64::from(i)))
        })
        .collect();

    let forecast = harvest_forecast(&records, date(2024, 7, 10), DEFAULT_HORIZON_DAYS);

    assert_eq!(forecast.history_days, 10);
    assert_eq!(forecast.points.len(), DEFAULT_HORIZON_DAYS as usize);
    assert_relative_eq!(forecast.slope_kg_per_day, 2.0, epsilon = 1e-6);
    assert_eq!(forecast.points[0].date, date(2024, 7, 11));
    // next value on the fitted line
    assert_relative_eq!(forecast.points[0].harvested_kg, 25.0, epsilon = 1e-4);
}

#[test]
fn forecast_ignores_rows_after_the_cutoff() {
    let records: Vec<DailyRecord> = (0..10)
        .map(|i| DailyRecord {
            harvested_kg: 5.0 + 2.0 * f64::from(i),
            ..record(date(2024, 7, 1) + chrono::Duration::days(i64::from(i)))
        })
        .collect();

    let forecast = harvest_forecast(&records, date(2024, 7, 5), 5);
    assert_eq!(forecast.history_days, 5);
    assert_eq!(forecast.points[0].date, date(2024, 7, 6));
}

#[test]
fn forecast_needs_at_least_two_history_rows() {
    let records = vec![record(date(2024, 7, 1))];
    let forecast = harvest_forecast(&records, date(2024, 7, 1), 30);
    assert_eq!(forecast.history_days, 1);
    assert!(forecast.points.is_empty());

    let forecast = harvest_forecast(&[], date(2024, 7, 1), 30);
    assert_eq!(forecast.history_days, 0);
    assert!(forecast.points.is_empty());
}
