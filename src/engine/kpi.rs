// ==========================================
// Traffic KPI Core - KPI Engine
// ==========================================
// Pure derivation of the KPI summary from a validated
// record collection: totals, zero-guarded ratios, per-day
// averages, quality analysis, trends, benchmarks
// ==========================================

use crate::domain::kpi::{BenchmarkSummary, KpiSummary};
use crate::domain::traffic::TrafficRecord;
use crate::domain::types::BenchmarkTier;
use crate::engine::benchmark;
use crate::engine::trend::TrendAnalyzer;

// ==========================================
// KpiEngine
// ==========================================
// Stateless; each call takes a full snapshot of records and
// returns a fresh summary. Callers re-filtering interactively
// re-invoke rather than update a prior summary.
pub struct KpiEngine {
    trend_analyzer: TrendAnalyzer,
}

impl KpiEngine {
    pub fn new() -> Self {
        Self {
            trend_analyzer: TrendAnalyzer::new(),
        }
    }

    /// Derive the full KPI summary. Deterministic, no I/O.
    ///
    /// An empty collection short-circuits to the all-zero summary
    /// (Stable trends, Average benchmarks).
    pub fn calculate(&self, records: &[TrafficRecord]) -> KpiSummary {
        if records.is_empty() {
            return KpiSummary::zeroed();
        }

        // 1. Totals
        let total_impressions: f64 = records.iter().map(|r| r.impressions).sum();
        let total_reach: f64 = records.iter().map(|r| r.reach).sum();
        let total_clicks: f64 = records.iter().map(|r| r.clicks).sum();
        let total_cost: f64 = records.iter().map(|r| r.cost).sum();
        let total_conversions: f64 = records.iter().map(|r| r.conversions).sum();
        let total_leads: f64 = records.iter().map(|r| r.leads).sum();
        let total_revenue: f64 = records.iter().map(|r| r.revenue).sum();

        // 2. Ratio KPIs (denominator 0 => ratio 0, never NaN/Infinity)
        let ctr = ratio(total_clicks, total_impressions) * 100.0;
        let cpm = ratio(total_cost, total_impressions) * 1000.0;
        let cpc = ratio(total_cost, total_clicks);
        let cpl = ratio(total_cost, total_leads);
        let cpa = ratio(total_cost, total_conversions);
        let roas = ratio(total_revenue, total_cost);
        let roi = ratio(total_revenue - total_cost, total_cost) * 100.0;
        let conversion_rate = ratio(total_conversions, total_clicks) * 100.0;
        let frequency = ratio(total_impressions, total_reach);
        let reach_rate = ratio(total_reach, total_impressions) * 100.0;

        // 3. Per-day averages
        let days = records.len() as f64;
        let average_cost_per_day = total_cost / days;
        let average_clicks_per_day = total_clicks / days;
        let average_conversions_per_day = total_conversions / days;
        let average_revenue_per_day = total_revenue / days;

        // 4. Quality analysis
        let quality_score =
            benchmark::quality_score(ctr, cpc, conversion_rate, roas, total_revenue);
        let efficiency_index = benchmark::efficiency_index(ctr, cpc, conversion_rate);

        // 5. Trends (first half vs second half)
        let trend = self.trend_analyzer.analyze(records);

        // 6. Benchmarks; ROAS is not meaningfully computable
        //    without revenue, so it defaults to Average
        let benchmarks = BenchmarkSummary {
            ctr_status: benchmark::ctr_status(ctr),
            cpc_status: benchmark::cpc_status(cpc),
            roas_status: if total_revenue > 0.0 {
                benchmark::roas_status(roas)
            } else {
                BenchmarkTier::Average
            },
        };

        KpiSummary {
            total_impressions,
            total_reach,
            total_clicks,
            total_cost,
            total_conversions,
            total_leads,
            total_revenue,
            ctr,
            cpm,
            cpc,
            cpl,
            cpa,
            roas,
            roi,
            conversion_rate,
            frequency,
            reach_rate,
            average_cost_per_day,
            average_clicks_per_day,
            average_conversions_per_day,
            average_revenue_per_day,
            quality_score,
            efficiency_index,
            trend,
            benchmarks,
        }
    }
}

impl Default for KpiEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-guarded division
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CpcTier, Trend};
    use chrono::NaiveDate;

    fn record(day: u32, impressions: f64, clicks: f64, cost: f64) -> TrafficRecord {
        let mut r = TrafficRecord::empty(NaiveDate::from_ymd_opt(2024, 1, day).unwrap());
        r.impressions = impressions;
        r.clicks = clicks;
        r.cost = cost;
        r
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let summary = KpiEngine::new().calculate(&[]);
        assert_eq!(summary.total_impressions, 0.0);
        assert_eq!(summary.ctr, 0.0);
        assert_eq!(summary.trend.clicks, Trend::Stable);
        assert_eq!(summary.benchmarks.cpc_status, CpcTier::Average);
    }

    #[test]
    fn test_totals_and_ratios() {
        let records = vec![
            record(1, 1000.0, 50.0, 100.0),
            record(2, 2000.0, 150.0, 300.5),
        ];
        let summary = KpiEngine::new().calculate(&records);

        assert_eq!(summary.total_impressions, 3000.0);
        assert_eq!(summary.total_clicks, 200.0);
        assert_eq!(summary.total_cost, 400.5);
        assert!((summary.ctr - 6.6667).abs() < 0.001);
        assert!((summary.cpc - 2.0025).abs() < 1e-9);
        assert!((summary.cpm - 133.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_denominators_never_produce_nan() {
        // impressions only: everything else is zero
        let mut r = TrafficRecord::empty(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        r.impressions = 1000.0;
        let summary = KpiEngine::new().calculate(&[r]);

        for value in [
            summary.ctr,
            summary.cpc,
            summary.cpl,
            summary.cpa,
            summary.roas,
            summary.roi,
            summary.conversion_rate,
            summary.frequency,
            summary.reach_rate,
        ] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_per_day_averages() {
        let records = vec![
            record(1, 1000.0, 40.0, 100.0),
            record(2, 1000.0, 60.0, 300.0),
        ];
        let summary = KpiEngine::new().calculate(&records);
        assert_eq!(summary.average_cost_per_day, 200.0);
        assert_eq!(summary.average_clicks_per_day, 50.0);
    }

    #[test]
    fn test_scores_within_bounds() {
        let records = vec![
            record(1, 100.0, 90.0, 1.0), // absurd CTR
            record(2, 100.0, 90.0, 1.0),
        ];
        let summary = KpiEngine::new().calculate(&records);
        assert!((0.0..=100.0).contains(&summary.quality_score));
        assert!((0.0..=100.0).contains(&summary.efficiency_index));
    }

    #[test]
    fn test_roas_benchmark_defaults_without_revenue() {
        let records = vec![record(1, 1000.0, 50.0, 100.0)];
        let summary = KpiEngine::new().calculate(&records);
        assert_eq!(summary.benchmarks.roas_status, BenchmarkTier::Average);
    }
}
