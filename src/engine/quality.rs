// ==========================================
// Traffic KPI Core - Data Quality Report
// ==========================================
// Scores a validation outcome, not the record values:
// warnings and dataset size drive the verdict
// ==========================================

use crate::domain::kpi::DataQualityReport;
use crate::domain::traffic::ValidationResult;
use crate::domain::types::QualityLevel;

const WARNING_PENALTY: f64 = 10.0;
const LARGE_DATASET_BONUS: f64 = 10.0;
const MEDIUM_DATASET_BONUS: f64 = 5.0;
const SMALL_DATASET_PENALTY: f64 = 20.0;

/// Quality verdict for an imported dataset.
///
/// An invalid result scores 0 outright. Otherwise the score starts
/// at 100, loses 10 per warning, and is adjusted for dataset size
/// (>= 30 rows +10, >= 7 rows +5, < 3 rows -20), clamped to [0, 100].
pub fn data_quality_report(result: &ValidationResult) -> DataQualityReport {
    if !result.is_valid {
        return DataQualityReport {
            score: 0.0,
            level: QualityLevel::Poor,
            feedback: "The file contains errors that block the import".to_string(),
        };
    }

    let mut score = 100.0 - result.warnings.len() as f64 * WARNING_PENALTY;

    let rows = result.data.len();
    if rows >= 30 {
        score += LARGE_DATASET_BONUS;
    } else if rows >= 7 {
        score += MEDIUM_DATASET_BONUS;
    } else if rows < 3 {
        score -= SMALL_DATASET_PENALTY;
    }

    let score = score.clamp(0.0, 100.0);

    let (level, feedback) = if score >= 90.0 {
        (
            QualityLevel::Excellent,
            "Excellent data quality, analysis will be highly reliable",
        )
    } else if score >= 75.0 {
        (
            QualityLevel::Good,
            "Good data quality, minor issues detected",
        )
    } else if score >= 50.0 {
        (
            QualityLevel::Fair,
            "Fair data quality, review the warnings before relying on the analysis",
        )
    } else {
        (
            QualityLevel::Poor,
            "Poor data quality, the analysis may be misleading",
        )
    };

    DataQualityReport {
        score,
        level,
        feedback: feedback.to_string(),
    }
}
