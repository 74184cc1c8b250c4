// ==========================================
// Traffic KPI Core - KPI Domain Model
// ==========================================
// KpiSummary: flat immutable snapshot produced by the KPI
// engine; consumed by dashboards and export collaborators
// ==========================================

use crate::domain::types::{BenchmarkTier, CpcTier, QualityLevel, Trend};
use serde::{Deserialize, Serialize};

// ==========================================
// TrendSummary - Direction per tracked metric
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub impressions: Trend,
    pub clicks: Trend,
    pub cost: Trend,
    pub ctr: Trend,
    pub conversions: Trend,
    pub roas: Trend,
}

impl TrendSummary {
    pub fn all_stable() -> Self {
        Self {
            impressions: Trend::Stable,
            clicks: Trend::Stable,
            cost: Trend::Stable,
            ctr: Trend::Stable,
            conversions: Trend::Stable,
            roas: Trend::Stable,
        }
    }
}

// ==========================================
// BenchmarkSummary - Industry benchmark tiers
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub ctr_status: BenchmarkTier,
    pub cpc_status: CpcTier,
    pub roas_status: BenchmarkTier,
}

impl BenchmarkSummary {
    pub fn all_average() -> Self {
        Self {
            ctr_status: BenchmarkTier::Average,
            cpc_status: CpcTier::Average,
            roas_status: BenchmarkTier::Average,
        }
    }
}

// ==========================================
// KpiSummary - Full KPI snapshot
// ==========================================
// Created fresh from a record collection; never mutated.
// Every ratio is zero-guarded (denominator 0 => ratio 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSummary {
    // ===== Totals =====
    pub total_impressions: f64,
    pub total_reach: f64,
    pub total_clicks: f64,
    pub total_cost: f64,
    pub total_conversions: f64,
    pub total_leads: f64,
    pub total_revenue: f64,

    // ===== Ratio KPIs =====
    pub ctr: f64,             // clicks / impressions * 100
    pub cpm: f64,             // cost / impressions * 1000
    pub cpc: f64,             // cost / clicks
    pub cpl: f64,             // cost / leads
    pub cpa: f64,             // cost / conversions
    pub roas: f64,            // revenue / cost
    pub roi: f64,             // (revenue - cost) / cost * 100
    pub conversion_rate: f64, // conversions / clicks * 100

    // ===== Frequency and reach =====
    pub frequency: f64,  // impressions / reach
    pub reach_rate: f64, // reach / impressions * 100

    // ===== Per-day averages =====
    pub average_cost_per_day: f64,
    pub average_clicks_per_day: f64,
    pub average_conversions_per_day: f64,
    pub average_revenue_per_day: f64,

    // ===== Quality analysis =====
    pub quality_score: f64,    // 0-100
    pub efficiency_index: f64, // 0-100

    // ===== Trends and benchmarks =====
    pub trend: TrendSummary,
    pub benchmarks: BenchmarkSummary,
}

impl KpiSummary {
    /// All-zero summary for an empty record collection
    pub fn zeroed() -> Self {
        Self {
            total_impressions: 0.0,
            total_reach: 0.0,
            total_clicks: 0.0,
            total_cost: 0.0,
            total_conversions: 0.0,
            total_leads: 0.0,
            total_revenue: 0.0,
            ctr: 0.0,
            cpm: 0.0,
            cpc: 0.0,
            cpl: 0.0,
            cpa: 0.0,
            roas: 0.0,
            roi: 0.0,
            conversion_rate: 0.0,
            frequency: 0.0,
            reach_rate: 0.0,
            average_cost_per_day: 0.0,
            average_clicks_per_day: 0.0,
            average_conversions_per_day: 0.0,
            average_revenue_per_day: 0.0,
            quality_score: 0.0,
            efficiency_index: 0.0,
            trend: TrendSummary::all_stable(),
            benchmarks: BenchmarkSummary::all_average(),
        }
    }
}

// ==========================================
// DataQualityReport - Dataset quality verdict
// ==========================================
// Derived from a ValidationResult, not from record values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataQualityReport {
    pub score: f64, // 0-100
    pub level: QualityLevel,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_summary_defaults() {
        let summary = KpiSummary::zeroed();
        assert_eq!(summary.ctr, 0.0);
        assert_eq!(summary.trend.impressions, Trend::Stable);
        assert_eq!(summary.benchmarks.ctr_status, BenchmarkTier::Average);
        assert_eq!(summary.benchmarks.cpc_status, CpcTier::Average);
    }
}
