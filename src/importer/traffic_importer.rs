// ==========================================
// Traffic KPI Core - Traffic Importer
// ==========================================
// Orchestrates the ingestion pipeline:
// 0. file parsing (CSV/XLSX)
// 1. column normalization (auto + explicit mapping)
// 2. summary-row filtering + record validation
// 3. date sort of the validated collection
// ==========================================

use crate::config::ImportConfig;
use crate::domain::traffic::{StructureAnalysis, TrafficRecord, ValidationResult};
use crate::domain::types::{CanonicalField, DatasetKind};
use crate::importer::column_normalizer::ColumnNormalizer;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::row_filter::is_summary_row;
use crate::importer::traffic_importer_trait::{RawTable, TrafficImporter};
use crate::importer::validator::RecordValidator;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Explicit-mapping sentinel: the user opted the column out
const DROP_COLUMN: &str = "none";

// ==========================================
// TrafficImporterImpl
// ==========================================
pub struct TrafficImporterImpl {
    config: ImportConfig,
    normalizer: ColumnNormalizer,
    validator: RecordValidator,
    file_parser: UniversalFileParser,
}

impl TrafficImporterImpl {
    pub fn new(config: ImportConfig) -> Self {
        let normalizer = ColumnNormalizer::with_overrides(&config.synonym_overrides);
        let validator = RecordValidator::new(config.locale);
        Self {
            config,
            normalizer,
            validator,
            file_parser: UniversalFileParser,
        }
    }

    /// Rewrite a raw row's keys to canonical field names.
    ///
    /// Explicit mappings win for the columns they cover; a column
    /// mapped to "none" is dropped. Everything else goes through
    /// automatic normalization.
    fn normalize_row(
        &self,
        row: &HashMap<String, String>,
        explicit_mapping: Option<&HashMap<String, String>>,
    ) -> HashMap<String, String> {
        let mut normalized = HashMap::new();
        for (key, value) in row {
            let mapped_key = match explicit_mapping.and_then(|m| m.get(key)) {
                Some(target) if target.as_str() == DROP_COLUMN => continue,
                Some(target) => target.clone(),
                None => self.normalizer.normalize(key),
            };
            normalized.insert(mapped_key, value.clone());
        }
        normalized
    }

    /// Parse and validate a file, returning the raw validation
    /// outcome with errors, warnings and surviving records.
    ///
    /// `parse_full` builds on this; callers wanting the warning
    /// list (e.g. for a data-quality report) use it directly.
    pub fn validate_file(
        &self,
        file_path: &Path,
        explicit_mapping: Option<&HashMap<String, String>>,
    ) -> ImportResult<ValidationResult> {
        let table = self.file_parser.parse(file_path)?;
        if table.rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        let normalized: Vec<HashMap<String, String>> = table
            .rows
            .iter()
            .map(|row| self.normalize_row(row, explicit_mapping))
            .collect();

        Ok(self.validator.validate(&normalized, DatasetKind::Traffic))
    }

    /// Normalized rows surviving the summary filter
    fn normalized_data_rows(
        &self,
        table: &RawTable,
        explicit_mapping: Option<&HashMap<String, String>>,
    ) -> Vec<HashMap<String, String>> {
        table
            .rows
            .iter()
            .map(|row| self.normalize_row(row, explicit_mapping))
            .filter(|row| !is_summary_row(row))
            .collect()
    }
}

impl TrafficImporter for TrafficImporterImpl {
    fn analyze_structure(&self, file_path: &Path) -> ImportResult<StructureAnalysis> {
        let table = self.file_parser.parse(file_path)?;

        // Preview slice: first data rows after summary filtering
        let preview: Vec<HashMap<String, String>> = self
            .normalized_data_rows(&table, None)
            .into_iter()
            .take(self.config.preview_rows)
            .collect();

        if preview.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        let normalized_headers: Vec<String> = table
            .headers
            .iter()
            .map(|h| self.normalizer.normalize(h))
            .collect();

        let needs_mapping = !CanonicalField::REQUIRED_FOR_MAPPING
            .iter()
            .all(|field| normalized_headers.iter().any(|h| h == field.name()));

        debug!(
            columns = table.headers.len(),
            needs_mapping, "structure analysis complete"
        );

        Ok(StructureAnalysis {
            columns: table.headers,
            needs_mapping,
        })
    }

    fn parse_full(
        &self,
        file_path: &Path,
        explicit_mapping: Option<&HashMap<String, String>>,
    ) -> ImportResult<Vec<TrafficRecord>> {
        let result = self.validate_file(file_path, explicit_mapping)?;

        for warning in &result.warnings {
            warn!("{}", warning);
        }

        if !result.is_valid {
            return Err(ImportError::Validation {
                message: result.failure_message(),
            });
        }

        if result.data.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        let mut records = result.data;
        records.sort_by_key(|record| record.date);

        info!(records = records.len(), "file parsed and validated");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn importer() -> TrafficImporterImpl {
        TrafficImporterImpl::new(ImportConfig::default())
    }

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_analyze_structure_auto_resolvable() {
        let file = csv_file(
            "Day,Impressions,Link Clicks,Amount Spent\n\
             2024-01-01,1000,50,100.00\n",
        );
        let analysis = importer().analyze_structure(file.path()).unwrap();
        assert!(!analysis.needs_mapping);
        assert_eq!(
            analysis.columns,
            vec!["Day", "Impressions", "Link Clicks", "Amount Spent"]
        );
    }

    #[test]
    fn test_analyze_structure_needs_mapping() {
        let file = csv_file(
            "Day,Views,Interactions,Budget Used\n\
             2024-01-01,1000,50,100.00\n",
        );
        let analysis = importer().analyze_structure(file.path()).unwrap();
        assert!(analysis.needs_mapping);
    }

    #[test]
    fn test_analyze_structure_empty_file() {
        let file = csv_file("Day,Impressions,Clicks,Cost\n");
        let result = importer().analyze_structure(file.path());
        assert!(matches!(result, Err(ImportError::EmptyFile)));
    }

    #[test]
    fn test_parse_full_sorts_by_date() {
        let file = csv_file(
            "Day,Impressions,Link Clicks,Amount Spent\n\
             05/01/2024,2000,150,300.50\n\
             2024-01-01,1000,50,100.00\n",
        );
        let records = importer().parse_full(file.path(), None).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].date < records[1].date);
        assert_eq!(records[0].impressions, 1000.0);
    }

    #[test]
    fn test_parse_full_explicit_mapping_precedence() {
        let file = csv_file(
            "Day,Views,Link Clicks,Amount Spent,Notes\n\
             2024-01-01,1000,50,100.00,check later\n",
        );
        let mut mapping = HashMap::new();
        mapping.insert("Views".to_string(), "impressions".to_string());
        mapping.insert("Notes".to_string(), "none".to_string());

        let records = importer().parse_full(file.path(), Some(&mapping)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].impressions, 1000.0);
    }

    #[test]
    fn test_parse_full_validation_failure_aggregates() {
        let file = csv_file(
            "Day,Impressions,Link Clicks,Amount Spent\n\
             2024-01-01,1000,10,100.00\n\
             2024-01-02,not-a-number,20,50.00\n",
        );
        let result = importer().parse_full(file.path(), None);
        match result {
            Err(ImportError::Validation { message }) => {
                assert!(message.contains("Row 2"));
                assert!(message.contains("Suggestions:"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_file_feeds_single_pass_consumers() {
        // Consumers holding the ValidationResult can sort its data
        // themselves instead of re-reading the file through parse_full
        let file = csv_file(
            "Day,Impressions,Link Clicks,Amount Spent\n\
             05/01/2024,2000,150,300.50\n\
             2024-01-01,1000,50,100.00\n",
        );
        let imp = importer();

        let validation = imp.validate_file(file.path(), None).unwrap();
        assert!(validation.is_valid);
        let mut from_validation = validation.data;
        from_validation.sort_by_key(|record| record.date);

        let from_parse_full = imp.parse_full(file.path(), None).unwrap();
        assert_eq!(from_validation, from_parse_full);
    }

    #[test]
    fn test_parse_full_drops_trailing_totals_row() {
        let file = csv_file(
            "Day,Impressions,Link Clicks,Amount Spent\n\
             2024-01-01,1000,50,100.00\n\
             ,30000,,\n",
        );
        let records = importer().parse_full(file.path(), None).unwrap();
        assert_eq!(records.len(), 1);
    }
}
