// ==========================================
// Traffic KPI Core - Domain Model Layer
// ==========================================
// Entities and shared types; no parsing logic,
// no engine logic
// ==========================================

pub mod kpi;
pub mod traffic;
pub mod types;

// Re-export core types
pub use kpi::{BenchmarkSummary, DataQualityReport, KpiSummary, TrendSummary};
pub use traffic::{StructureAnalysis, TrafficRecord, ValidationResult};
pub use types::{
    BenchmarkTier, CanonicalField, CpcTier, DatasetKind, FieldKind, NumberLocale, QualityLevel,
    Trend,
};
