// ==========================================
// Traffic KPI Core - Importer Traits
// ==========================================
// Interface seams for the ingestion pipeline
// (no implementations here)
// ==========================================

use crate::domain::traffic::{StructureAnalysis, TrafficRecord};
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawTable - Stage 0 output
// ==========================================
// Headers in file order plus one map per non-blank data row.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

// ==========================================
// FileParser Trait
// ==========================================
// Stage 0: file -> raw rows (HashMap<header, value>)
// Implementors: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// Parse a file into raw string rows keyed by header name
    ///
    /// # Returns
    /// - Ok(RawTable): headers + one map per non-blank data row
    /// - Err: file missing, wrong extension, or parse failure
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// TrafficImporter Trait
// ==========================================
// Two-phase upload protocol exposed to host applications.
// Implementor: TrafficImporterImpl
pub trait TrafficImporter: Send + Sync {
    /// Phase 1: inspect a preview slice and decide whether all
    /// required fields (date, impressions, clicks, cost) resolve
    /// through automatic column normalization
    ///
    /// # Returns
    /// - Ok(StructureAnalysis): original headers + needs_mapping flag
    /// - Err: unreadable file, or nothing survives summary filtering
    fn analyze_structure(&self, file_path: &Path) -> ImportResult<StructureAnalysis>;

    /// Phase 2: full parse + validation
    ///
    /// # Arguments
    /// - explicit_mapping: source column -> canonical field name;
    ///   takes precedence over automatic normalization for the
    ///   columns it covers; the sentinel value "none" drops a column
    ///
    /// # Returns
    /// - Ok(records): validated records, sorted ascending by date
    /// - Err(Validation): aggregated errors + suggestions
    fn parse_full(
        &self,
        file_path: &Path,
        explicit_mapping: Option<&HashMap<String, String>>,
    ) -> ImportResult<Vec<TrafficRecord>>;
}
