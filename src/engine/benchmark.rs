// ==========================================
// Traffic KPI Core - Benchmark Classification
// ==========================================
// Industry-style fixed thresholds: benchmark tiers per
// KPI, composite quality score, efficiency index
// ==========================================

use crate::domain::types::{BenchmarkTier, CpcTier};

/// CTR tier: excellent >= 3%, good >= 1.5%, average >= 0.5%
pub fn ctr_status(ctr: f64) -> BenchmarkTier {
    if ctr >= 3.0 {
        BenchmarkTier::Excellent
    } else if ctr >= 1.5 {
        BenchmarkTier::Good
    } else if ctr >= 0.5 {
        BenchmarkTier::Average
    } else {
        BenchmarkTier::Poor
    }
}

/// CPC tier: lower is better. A CPC of exactly 0 signals absence
/// of click data rather than efficiency, so it reads Average.
pub fn cpc_status(cpc: f64) -> CpcTier {
    if cpc == 0.0 {
        CpcTier::Average
    } else if cpc <= 2.0 {
        CpcTier::Excellent
    } else if cpc <= 5.0 {
        CpcTier::Good
    } else if cpc <= 15.0 {
        CpcTier::Average
    } else {
        CpcTier::Expensive
    }
}

/// ROAS tier: excellent >= 6, good >= 4, average >= 2. Callers
/// force Average when no revenue data exists at all.
pub fn roas_status(roas: f64) -> BenchmarkTier {
    if roas >= 6.0 {
        BenchmarkTier::Excellent
    } else if roas >= 4.0 {
        BenchmarkTier::Good
    } else if roas >= 2.0 {
        BenchmarkTier::Average
    } else {
        BenchmarkTier::Poor
    }
}

/// Composite quality score in [0, 100].
///
/// Starts at 50 and applies fixed tier weights for CTR, CPC and
/// conversion rate; the ROAS tier only counts when revenue data
/// exists at all.
pub fn quality_score(
    ctr: f64,
    cpc: f64,
    conversion_rate: f64,
    roas: f64,
    total_revenue: f64,
) -> f64 {
    let mut score: f64 = 50.0;

    // CTR (1-3% is good, >3% is excellent)
    if ctr >= 3.0 {
        score += 20.0;
    } else if ctr >= 1.0 {
        score += 10.0;
    } else if ctr < 0.5 {
        score -= 15.0;
    }

    // CPC (lower is better)
    if cpc > 0.0 && cpc <= 2.0 {
        score += 15.0;
    } else if cpc <= 5.0 {
        score += 5.0;
    } else if cpc > 20.0 {
        score -= 15.0;
    }

    // Conversion rate (>2% is good, >5% is excellent)
    if conversion_rate >= 5.0 {
        score += 15.0;
    } else if conversion_rate >= 2.0 {
        score += 10.0;
    } else if conversion_rate < 0.5 {
        score -= 10.0;
    }

    // ROAS (>4 is good, >6 is excellent), only with revenue data
    if total_revenue > 0.0 {
        if roas >= 6.0 {
            score += 20.0;
        } else if roas >= 4.0 {
            score += 10.0;
        } else if roas < 2.0 {
            score -= 15.0;
        }
    }

    score.clamp(0.0, 100.0)
}

/// Efficiency index in [0, 100]: unweighted mean of three
/// normalized components (CTR against a 5% ceiling, CPC inverted
/// against 10, conversion rate against a 10% ceiling).
pub fn efficiency_index(ctr: f64, cpc: f64, conversion_rate: f64) -> f64 {
    let ctr_normalized = (ctr / 5.0).min(1.0);
    // 0 when cpc is 0: no clicks occurred
    let cpc_normalized = if cpc > 0.0 {
        (1.0 - cpc / 10.0).max(0.0)
    } else {
        0.0
    };
    let conversion_normalized = (conversion_rate / 10.0).min(1.0);

    (ctr_normalized + cpc_normalized + conversion_normalized) / 3.0 * 100.0
}
