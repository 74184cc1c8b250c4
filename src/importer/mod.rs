// ==========================================
// Traffic KPI Core - Importer Layer
// ==========================================
// Ingestion pipeline: file parsing, column normalization,
// summary-row filtering, cell coercion, record validation,
// two-phase upload orchestration
// ==========================================

// Module declarations
pub mod column_normalizer;
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod row_filter;
pub mod traffic_importer;
pub mod traffic_importer_trait;
pub mod validator;

// Re-export core types
pub use column_normalizer::ColumnNormalizer;
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use row_filter::{is_summary_row, populated_field_count};
pub use traffic_importer::TrafficImporterImpl;
pub use validator::{FieldRule, RecordValidator};

// Re-export trait interfaces
pub use traffic_importer_trait::{FileParser, RawTable, TrafficImporter};
