// ==========================================
// Traffic KPI Core - Traffic Domain Model
// ==========================================
// TrafficRecord: one calendar day (or campaign-day) of
// advertising performance, built by the record validator
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// TrafficRecord - Canonical validated entity
// ==========================================
// Created once during parsing, immutable thereafter.
// Duplicate dates across records are legal; consumers aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRecord {
    // ===== Required fields =====
    pub date: NaiveDate,   // serialized as YYYY-MM-DD
    pub impressions: f64,  // non-negative
    pub cost: f64,         // non-negative

    // ===== Optional metrics (default 0) =====
    pub clicks: f64,
    pub conversions: f64,
    pub leads: f64,
    pub revenue: f64,
    pub reach: f64,

    // ===== Optional identity =====
    pub campaign_name: Option<String>,
}

impl TrafficRecord {
    /// Record with all metrics zeroed, for incremental construction
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            impressions: 0.0,
            cost: 0.0,
            clicks: 0.0,
            conversions: 0.0,
            leads: 0.0,
            revenue: 0.0,
            reach: 0.0,
            campaign_name: None,
        }
    }
}

// ==========================================
// ValidationResult - One validation pass
// ==========================================
// is_valid is false whenever errors is non-empty. Partial data
// may still be present for diagnostics, but callers must not use
// it when is_valid is false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub data: Vec<TrafficRecord>,
}

impl ValidationResult {
    /// Joined error + suggestion message for boundary reporting
    pub fn failure_message(&self) -> String {
        let suggestions = if self.suggestions.is_empty() {
            "None".to_string()
        } else {
            self.suggestions.join("\n")
        };
        format!(
            "Validation failed:\n{}\n\nSuggestions:\n{}",
            self.errors.join("\n"),
            suggestions
        )
    }
}

// ==========================================
// StructureAnalysis - Upload phase 1 output
// ==========================================
// needs_mapping signals the host UI must collect an explicit
// column mapping before full parsing (a control flag, not an error).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub columns: Vec<String>, // original header names, file order
    pub needs_mapping: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_zeroed() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let record = TrafficRecord::empty(date);
        assert_eq!(record.impressions, 0.0);
        assert_eq!(record.clicks, 0.0);
        assert_eq!(record.campaign_name, None);
    }

    #[test]
    fn test_record_date_serializes_iso() {
        let record = TrafficRecord::empty(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-02-01");
    }

    #[test]
    fn test_failure_message_without_suggestions() {
        let result = ValidationResult {
            is_valid: false,
            errors: vec!["Row 1: field 'date' is required".to_string()],
            ..Default::default()
        };
        let message = result.failure_message();
        assert!(message.contains("Row 1"));
        assert!(message.contains("Suggestions:\nNone"));
    }
}
