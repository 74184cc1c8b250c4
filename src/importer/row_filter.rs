// ==========================================
// Traffic KPI Core - Summary Row Filter
// ==========================================
// Ad platform exports commonly append a trailing "Totals"
// row with mostly blank cells; such a row must never be
// parsed as a dated record (it would corrupt date ordering
// and aggregate sums)
// ==========================================

use std::collections::HashMap;

/// Minimum populated cells for a row to count as data
const MIN_POPULATED_FIELDS: usize = 3;

/// Number of non-empty cells in a row
pub fn populated_field_count(row: &HashMap<String, String>) -> usize {
    row.values().filter(|v| !v.trim().is_empty()).count()
}

/// Classify a normalized row as a summary/total row.
///
/// True when fewer than 3 cells are populated, or when neither a
/// campaign name nor a date cell is populated. Summary rows are
/// dropped with a warning, never an error.
pub fn is_summary_row(row: &HashMap<String, String>) -> bool {
    if populated_field_count(row) < MIN_POPULATED_FIELDS {
        return true;
    }

    let has_campaign = row
        .get("campaignname")
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    let has_date = row
        .get("date")
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);

    !has_campaign && !has_date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_sparse_row_is_summary() {
        // Trailing totals row: only two populated cells
        let totals = row(&[
            ("date", ""),
            ("impressions", "30000"),
            ("cost", "4000.00"),
            ("clicks", ""),
        ]);
        assert!(is_summary_row(&totals));
    }

    #[test]
    fn test_row_without_campaign_or_date_is_summary() {
        let totals = row(&[
            ("impressions", "30000"),
            ("clicks", "1200"),
            ("cost", "4000.00"),
        ]);
        assert!(is_summary_row(&totals));
    }

    #[test]
    fn test_dated_row_is_data() {
        let data = row(&[
            ("date", "2024-01-01"),
            ("impressions", "1000"),
            ("cost", "100.00"),
        ]);
        assert!(!is_summary_row(&data));
    }

    #[test]
    fn test_campaign_row_without_date_is_data() {
        let data = row(&[
            ("campaignname", "Summer Sale"),
            ("impressions", "1000"),
            ("cost", "100.00"),
        ]);
        assert!(!is_summary_row(&data));
    }

    #[test]
    fn test_populated_field_count_ignores_whitespace() {
        let data = row(&[("date", "  "), ("impressions", "1000"), ("cost", "1")]);
        assert_eq!(populated_field_count(&data), 2);
    }
}
