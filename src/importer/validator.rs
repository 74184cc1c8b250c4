// ==========================================
// Traffic KPI Core - Record Validator
// ==========================================
// Rule-table driven validation of normalized rows:
// required/type/range checks per field, cross-field
// consistency checks per row, chronological and
// date-gap checks per dataset
// ==========================================

use crate::domain::traffic::{TrafficRecord, ValidationResult};
use crate::domain::types::{CanonicalField, DatasetKind, FieldKind, NumberLocale};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::row_filter::{is_summary_row, populated_field_count};
use chrono::NaiveDate;
use std::collections::HashMap;

// ==========================================
// FieldRule - One declarative validation rule
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: CanonicalField,
    pub required: bool,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

const fn number_rule(field: CanonicalField, required: bool) -> FieldRule {
    FieldRule {
        field,
        required,
        kind: FieldKind::Number,
        min: Some(0.0),
        max: None,
    }
}

// Traffic rule set. Clicks is not required: Facebook exports may
// leave it blank on impression-only days.
const TRAFFIC_RULES: &[FieldRule] = &[
    FieldRule {
        field: CanonicalField::Date,
        required: true,
        kind: FieldKind::Date,
        min: None,
        max: None,
    },
    number_rule(CanonicalField::Impressions, true),
    number_rule(CanonicalField::Clicks, false),
    number_rule(CanonicalField::Cost, true),
    number_rule(CanonicalField::Leads, false),
    number_rule(CanonicalField::Conversions, false),
    number_rule(CanonicalField::Revenue, false),
    number_rule(CanonicalField::Reach, false),
    FieldRule {
        field: CanonicalField::CampaignName,
        required: false,
        kind: FieldKind::Text,
        min: None,
        max: None,
    },
];

// Social media extension rule set
const SOCIAL_RULES: &[FieldRule] = &[
    number_rule(CanonicalField::Likes, false),
    number_rule(CanonicalField::Comments, false),
    number_rule(CanonicalField::Shares, false),
    number_rule(CanonicalField::Followers, false),
    number_rule(CanonicalField::Engagement, false),
    number_rule(CanonicalField::Posts, false),
    number_rule(CanonicalField::Stories, false),
    number_rule(CanonicalField::Reels, false),
    number_rule(CanonicalField::Saves, false),
    number_rule(CanonicalField::ProfileVisits, false),
];

// Cross-field sanity thresholds
const CTR_WARN_HIGH_PCT: f64 = 20.0;
const CTR_WARN_LOW_PCT: f64 = 0.1;
const CPC_WARN_HIGH: f64 = 100.0;

// Rows with at most this many populated cells and no date are
// treated as totals rows rather than invalid records
const SPARSE_ROW_FIELDS: usize = 3;

// ==========================================
// RecordValidator
// ==========================================
pub struct RecordValidator {
    cleaner: DataCleaner,
}

impl RecordValidator {
    pub fn new(locale: NumberLocale) -> Self {
        Self {
            cleaner: DataCleaner::new(locale),
        }
    }

    /// Validate normalized rows into a ValidationResult.
    ///
    /// Rows contributing only warnings are still included in the
    /// data; any error makes the overall result invalid.
    pub fn validate(
        &self,
        rows: &[HashMap<String, String>],
        kind: DatasetKind,
    ) -> ValidationResult {
        let mut result = ValidationResult::default();

        if rows.is_empty() {
            result.errors.push("File is empty or has no valid data".to_string());
            result
                .suggestions
                .push("Check that the file contains data and is a valid CSV or XLSX".to_string());
            return result;
        }

        let rules: Vec<FieldRule> = match kind {
            DatasetKind::Traffic => TRAFFIC_RULES.to_vec(),
            DatasetKind::Social => TRAFFIC_RULES
                .iter()
                .chain(SOCIAL_RULES.iter())
                .copied()
                .collect(),
        };

        self.check_required_columns(&rows[0], &rules, &mut result);

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;
            if let Some(record) = self.validate_row(row, row_number, &rules, &mut result) {
                result.data.push(record);
            }
        }

        self.check_dataset(&result.data, &mut result.warnings, &mut result.suggestions);

        result.is_valid = result.errors.is_empty();
        result
    }

    // ==========================================
    // Column-level checks
    // ==========================================

    /// Required columns must appear in the (normalized) header set
    fn check_required_columns(
        &self,
        first_row: &HashMap<String, String>,
        rules: &[FieldRule],
        result: &mut ValidationResult,
    ) {
        let missing: Vec<&str> = rules
            .iter()
            .filter(|rule| rule.required)
            .map(|rule| rule.field.name())
            .filter(|name| !first_row.contains_key(*name))
            .collect();

        if !missing.is_empty() {
            result
                .errors
                .push(format!("Missing required columns: {}", missing.join(", ")));
            result.suggestions.push(
                "Make sure the file contains the columns: date, impressions, clicks, cost"
                    .to_string(),
            );
        }
    }

    // ==========================================
    // Row-level validation
    // ==========================================

    /// Returns Some(record) when the row passed (possibly with
    /// warnings), None when it was skipped or produced errors.
    fn validate_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
        rules: &[FieldRule],
        result: &mut ValidationResult,
    ) -> Option<TrafficRecord> {
        // Summary/total rows are dropped with a warning, not an error
        if is_summary_row(row) {
            result.warnings.push(format!(
                "Row {}: skipping summary/total row without campaign or date data",
                row_number
            ));
            return None;
        }

        let mut date: Option<NaiveDate> = None;
        let mut numbers: HashMap<CanonicalField, f64> = HashMap::new();
        let mut campaign_name: Option<String> = None;
        let mut row_has_error = false;

        for rule in rules {
            let field_name = rule.field.name();
            let raw = row.get(field_name).map(|v| v.trim()).unwrap_or("");

            if raw.is_empty() {
                if rule.required {
                    // Secondary totals-row heuristic: a row that lost its
                    // date and carries almost no data is a totals row
                    if rule.field == CanonicalField::Date
                        && populated_field_count(row) <= SPARSE_ROW_FIELDS
                    {
                        result.warnings.push(format!(
                            "Row {}: skipping row with insufficient data (possible totals row)",
                            row_number
                        ));
                        return None;
                    }
                    result
                        .errors
                        .push(format!("Row {}: field '{}' is required", row_number, field_name));
                    row_has_error = true;
                } else if rule.kind == FieldKind::Number {
                    numbers.insert(rule.field, 0.0);
                }
                continue;
            }

            match rule.kind {
                FieldKind::Number => match self.cleaner.try_parse_number(raw) {
                    None => {
                        result.errors.push(format!(
                            "Row {}: '{}' must be a valid number (value: {})",
                            row_number, field_name, raw
                        ));
                        row_has_error = true;
                    }
                    Some(value) => {
                        if let Some(min) = rule.min {
                            if value < min {
                                result.errors.push(format!(
                                    "Row {}: '{}' must be greater than or equal to {}",
                                    row_number, field_name, min
                                ));
                                row_has_error = true;
                            }
                        }
                        if let Some(max) = rule.max {
                            if value > max {
                                result.warnings.push(format!(
                                    "Row {}: '{}' looks unusually high ({})",
                                    row_number, field_name, value
                                ));
                            }
                        }
                        numbers.insert(rule.field, value);
                    }
                },
                FieldKind::Date => match self.cleaner.parse_date(raw) {
                    None => {
                        result.errors.push(format!(
                            "Row {}: '{}' must be a valid date (value: {})",
                            row_number, field_name, raw
                        ));
                        result.suggestions.push(
                            "Use the format YYYY-MM-DD, DD/MM/YYYY or DD-MM-YYYY".to_string(),
                        );
                        row_has_error = true;
                    }
                    Some(parsed) => date = Some(parsed),
                },
                FieldKind::Text => {
                    let cleaned = self.cleaner.clean_text(raw);
                    if rule.field == CanonicalField::CampaignName && !cleaned.is_empty() {
                        campaign_name = Some(cleaned);
                    }
                }
            }
        }

        self.check_row_consistency(&numbers, row_number, result);

        if row_has_error {
            return None;
        }

        let date = date?;
        let metric = |field: CanonicalField| numbers.get(&field).copied().unwrap_or(0.0);
        Some(TrafficRecord {
            date,
            impressions: metric(CanonicalField::Impressions),
            cost: metric(CanonicalField::Cost),
            clicks: metric(CanonicalField::Clicks),
            conversions: metric(CanonicalField::Conversions),
            leads: metric(CanonicalField::Leads),
            revenue: metric(CanonicalField::Revenue),
            reach: metric(CanonicalField::Reach),
            campaign_name,
        })
    }

    /// Cross-field sanity checks, evaluated only when both operands
    /// are present and positive
    fn check_row_consistency(
        &self,
        numbers: &HashMap<CanonicalField, f64>,
        row_number: usize,
        result: &mut ValidationResult,
    ) {
        let value = |field: CanonicalField| numbers.get(&field).copied().unwrap_or(0.0);
        let clicks = value(CanonicalField::Clicks);
        let impressions = value(CanonicalField::Impressions);
        let leads = value(CanonicalField::Leads);
        let cost = value(CanonicalField::Cost);

        if clicks > 0.0 && impressions > 0.0 {
            let ctr = clicks / impressions * 100.0;
            if ctr > CTR_WARN_HIGH_PCT {
                result.warnings.push(format!(
                    "Row {}: CTR unusually high ({:.2}%), check the data",
                    row_number, ctr
                ));
            }
            if ctr < CTR_WARN_LOW_PCT {
                result.warnings.push(format!(
                    "Row {}: CTR unusually low ({:.2}%), may indicate a problem",
                    row_number, ctr
                ));
            }
        }

        if clicks > 0.0 && leads > 0.0 && leads > clicks {
            result.errors.push(format!(
                "Row {}: leads ({}) cannot exceed clicks ({})",
                row_number, leads, clicks
            ));
        }

        if cost > 0.0 && clicks > 0.0 {
            let cpc = cost / clicks;
            if cpc > CPC_WARN_HIGH {
                result.warnings.push(format!(
                    "Row {}: CPC unusually high ({:.2}), check the values",
                    row_number, cpc
                ));
            }
        }
    }

    // ==========================================
    // Dataset-level checks (advisory only)
    // ==========================================

    fn check_dataset(
        &self,
        data: &[TrafficRecord],
        warnings: &mut Vec<String>,
        suggestions: &mut Vec<String>,
    ) {
        if data.len() < 2 {
            return;
        }

        // Chronological order in insertion order
        let chronological = data.windows(2).all(|pair| pair[0].date <= pair[1].date);
        if !chronological {
            warnings.push(
                "Records are not in chronological order - trend analysis may be affected"
                    .to_string(),
            );
            suggestions.push("Sort the data by date for better analysis".to_string());
        }

        // Date-gap heuristic: a span much wider than the record count
        // suggests missing days
        if data.len() > 2 {
            let min_date = data.iter().map(|r| r.date).min().unwrap_or(data[0].date);
            let max_date = data.iter().map(|r| r.date).max().unwrap_or(data[0].date);
            let span_days = (max_date - min_date).num_days();
            if span_days > (data.len() as i64) * 2 {
                warnings.push(
                    "Significant gaps between dates - consider filling missing days".to_string(),
                );
            }
        }
    }
}
