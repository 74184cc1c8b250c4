// ==========================================
// Traffic KPI Core - Engine Layer
// ==========================================
// Pure derivation over validated records: KPI summary,
// trend classification, benchmark tiers, quality report
// ==========================================

// Module declarations
pub mod benchmark;
pub mod kpi;
pub mod quality;
pub mod trend;

// Re-export core types
pub use kpi::KpiEngine;
pub use quality::data_quality_report;
pub use trend::TrendAnalyzer;
