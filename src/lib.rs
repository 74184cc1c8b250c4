// ==========================================
// Traffic KPI Core - Library Root
// ==========================================
// Marketing-traffic ingestion and KPI analysis:
// CSV/XLSX import, column mapping, validation, KPI engine
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Importer layer - external data
pub mod importer;

// Engine layer - KPI derivation
pub mod engine;

// Configuration layer
pub mod config;

// Logging system
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{
    BenchmarkTier, CanonicalField, CpcTier, DatasetKind, FieldKind, NumberLocale, QualityLevel,
    Trend,
};

// Domain entities
pub use domain::{
    BenchmarkSummary, DataQualityReport, KpiSummary, StructureAnalysis, TrafficRecord,
    TrendSummary, ValidationResult,
};

// Importer
pub use importer::{
    ColumnNormalizer, DataCleaner, FileParser, ImportError, ImportResult, RecordValidator,
    TrafficImporter, TrafficImporterImpl,
};

// Engine
pub use engine::{data_quality_report, KpiEngine, TrendAnalyzer};

// Configuration
pub use config::ImportConfig;

// ==========================================
// Crate constants
// ==========================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Traffic KPI Core";
