// ==========================================
// Traffic KPI Core - Trend Analysis
// ==========================================
// First-half vs second-half comparison per metric,
// classified against a 10% relative-change threshold
// ==========================================

use crate::domain::kpi::TrendSummary;
use crate::domain::traffic::TrafficRecord;
use crate::domain::types::Trend;

/// Relative change (percent) beyond which a metric trends
const TREND_THRESHOLD_PCT: f64 = 10.0;

// ==========================================
// TrendAnalyzer
// ==========================================
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Classify the direction between two aggregate values.
    ///
    /// # Rules
    /// - both zero -> Stable
    /// - zero -> non-zero -> Up (asymmetric by design of the
    ///   source data: a metric appearing mid-period reads as growth)
    /// - relative change > 10% -> Up, < -10% -> Down, else Stable
    pub fn classify(&self, first: f64, second: f64) -> Trend {
        if first == 0.0 && second == 0.0 {
            return Trend::Stable;
        }
        if first == 0.0 {
            return Trend::Up;
        }
        let change = (second - first) / first * 100.0;
        if change > TREND_THRESHOLD_PCT {
            Trend::Up
        } else if change < -TREND_THRESHOLD_PCT {
            Trend::Down
        } else {
            Trend::Stable
        }
    }

    /// Per-metric trend over a record collection.
    ///
    /// Records are split at floor(n/2). Volume metrics compare the
    /// halves' means; CTR and ROAS compare the halves' aggregate
    /// ratios (sum/sum) to avoid bias toward low-volume days.
    pub fn analyze(&self, records: &[TrafficRecord]) -> TrendSummary {
        let mid = records.len() / 2;
        let (first, second) = records.split_at(mid);

        if first.is_empty() || second.is_empty() {
            return TrendSummary::all_stable();
        }

        let mean = |half: &[TrafficRecord], metric: fn(&TrafficRecord) -> f64| -> f64 {
            half.iter().map(metric).sum::<f64>() / half.len() as f64
        };
        let ratio = |half: &[TrafficRecord],
                     numerator: fn(&TrafficRecord) -> f64,
                     denominator: fn(&TrafficRecord) -> f64,
                     scale: f64|
         -> f64 {
            let denom: f64 = half.iter().map(denominator).sum();
            if denom > 0.0 {
                half.iter().map(numerator).sum::<f64>() / denom * scale
            } else {
                0.0
            }
        };

        TrendSummary {
            impressions: self.classify(
                mean(first, |r| r.impressions),
                mean(second, |r| r.impressions),
            ),
            clicks: self.classify(mean(first, |r| r.clicks), mean(second, |r| r.clicks)),
            cost: self.classify(mean(first, |r| r.cost), mean(second, |r| r.cost)),
            ctr: self.classify(
                ratio(first, |r| r.clicks, |r| r.impressions, 100.0),
                ratio(second, |r| r.clicks, |r| r.impressions, 100.0),
            ),
            conversions: self.classify(
                mean(first, |r| r.conversions),
                mean(second, |r| r.conversions),
            ),
            roas: self.classify(
                ratio(first, |r| r.revenue, |r| r.cost, 1.0),
                ratio(second, |r| r.revenue, |r| r.cost, 1.0),
            ),
        }
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
