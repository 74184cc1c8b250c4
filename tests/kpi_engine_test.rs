// ==========================================
// KPI engine integration tests
// ==========================================
// KPI derivation over realistic record collections:
// zero guards, trends, benchmarks, quality scoring
// ==========================================

use chrono::NaiveDate;
use traffic_kpi::engine::{data_quality_report, KpiEngine};
use traffic_kpi::{
    BenchmarkTier, CpcTier, QualityLevel, TrafficRecord, Trend, ValidationResult,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn record(d: u32, impressions: f64, clicks: f64, cost: f64, revenue: f64) -> TrafficRecord {
    let mut r = TrafficRecord::empty(day(d));
    r.impressions = impressions;
    r.clicks = clicks;
    r.cost = cost;
    r.revenue = revenue;
    r
}

// ==========================================
// Zero guards
// ==========================================

#[test]
fn test_all_ratios_zero_guarded() {
    // A record with no activity at all
    let records = vec![TrafficRecord::empty(day(1))];
    let summary = KpiEngine::new().calculate(&records);

    assert_eq!(summary.ctr, 0.0);
    assert_eq!(summary.cpc, 0.0);
    assert_eq!(summary.cpm, 0.0);
    assert_eq!(summary.roas, 0.0);
    assert_eq!(summary.roi, 0.0);
    assert_eq!(summary.frequency, 0.0);
    assert!(summary.quality_score.is_finite());
    assert!(summary.efficiency_index.is_finite());
}

#[test]
fn test_empty_collection_yields_zeroed_summary() {
    let summary = KpiEngine::new().calculate(&[]);
    assert_eq!(summary.total_cost, 0.0);
    assert_eq!(summary.trend.roas, Trend::Stable);
    assert_eq!(summary.benchmarks.roas_status, BenchmarkTier::Average);
}

// ==========================================
// Trend symmetry
// ==========================================

#[test]
fn test_impressions_trend_symmetry() {
    let engine = KpiEngine::new();

    let rising: Vec<TrafficRecord> = (1..=5)
        .map(|d| record(d, 100.0, 5.0, 10.0, 0.0))
        .chain((6..=10).map(|d| record(d, 130.0, 5.0, 10.0, 0.0)))
        .collect();
    assert_eq!(engine.calculate(&rising).trend.impressions, Trend::Up);

    let falling: Vec<TrafficRecord> = (1..=5)
        .map(|d| record(d, 130.0, 5.0, 10.0, 0.0))
        .chain((6..=10).map(|d| record(d, 100.0, 5.0, 10.0, 0.0)))
        .collect();
    assert_eq!(engine.calculate(&falling).trend.impressions, Trend::Down);
}

#[test]
fn test_flat_series_is_stable() {
    let records: Vec<TrafficRecord> = (1..=10)
        .map(|d| record(d, 1000.0, 30.0, 50.0, 200.0))
        .collect();
    let trend = KpiEngine::new().calculate(&records).trend;
    assert_eq!(trend.impressions, Trend::Stable);
    assert_eq!(trend.clicks, Trend::Stable);
    assert_eq!(trend.ctr, Trend::Stable);
    assert_eq!(trend.roas, Trend::Stable);
}

// ==========================================
// Benchmark tiers
// ==========================================

#[test]
fn test_strong_campaign_benchmarks() {
    // CTR 4%, CPC 1.25, ROAS 8
    let records = vec![
        record(1, 10000.0, 400.0, 500.0, 4000.0),
        record(2, 10000.0, 400.0, 500.0, 4000.0),
    ];
    let summary = KpiEngine::new().calculate(&records);

    assert_eq!(summary.benchmarks.ctr_status, BenchmarkTier::Excellent);
    assert_eq!(summary.benchmarks.cpc_status, CpcTier::Excellent);
    assert_eq!(summary.benchmarks.roas_status, BenchmarkTier::Excellent);
    assert!(summary.quality_score > 75.0);
}

#[test]
fn test_roas_benchmark_neutral_without_revenue() {
    // Terrible ROAS would read Poor, but no revenue means no verdict
    let records = vec![record(1, 1000.0, 50.0, 500.0, 0.0)];
    let summary = KpiEngine::new().calculate(&records);
    assert_eq!(summary.benchmarks.roas_status, BenchmarkTier::Average);
}

// ==========================================
// Score bounds
// ==========================================

#[test]
fn test_scores_bounded_for_extreme_inputs() {
    let engine = KpiEngine::new();

    let terrible = vec![record(1, 1_000_000.0, 10.0, 50_000.0, 1.0)];
    let s = engine.calculate(&terrible);
    assert!((0.0..=100.0).contains(&s.quality_score));
    assert!((0.0..=100.0).contains(&s.efficiency_index));

    let stellar = vec![record(1, 1000.0, 200.0, 100.0, 5000.0)];
    let s = engine.calculate(&stellar);
    assert!((0.0..=100.0).contains(&s.quality_score));
    assert!((0.0..=100.0).contains(&s.efficiency_index));
}

// ==========================================
// Data quality report
// ==========================================

#[test]
fn test_quality_report_tracks_warnings_and_size() {
    let clean = ValidationResult {
        is_valid: true,
        errors: vec![],
        warnings: vec![],
        suggestions: vec![],
        data: (1..=30).map(|d| record(d, 1000.0, 50.0, 100.0, 0.0)).collect(),
    };
    let report = data_quality_report(&clean);
    assert_eq!(report.score, 100.0);
    assert_eq!(report.level, QualityLevel::Excellent);

    let noisy = ValidationResult {
        warnings: vec!["w1".into(), "w2".into(), "w3".into(), "w4".into()],
        ..clean
    };
    let report = data_quality_report(&noisy);
    assert_eq!(report.score, 70.0);
    assert_eq!(report.level, QualityLevel::Fair);
}

#[test]
fn test_quality_report_zero_for_invalid() {
    let invalid = ValidationResult {
        is_valid: false,
        errors: vec!["Row 1: field 'date' is required".into()],
        warnings: vec![],
        suggestions: vec![],
        data: vec![],
    };
    let report = data_quality_report(&invalid);
    assert_eq!(report.score, 0.0);
    assert_eq!(report.level, QualityLevel::Poor);
}
