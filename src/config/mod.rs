// ==========================================
// Traffic KPI Core - Import Configuration
// ==========================================
// Explicit, in-memory configuration for the ingestion
// pipeline; no persistence, no environment variables
// ==========================================

use crate::domain::types::NumberLocale;

// ==========================================
// ImportConfig - Pipeline configuration
// ==========================================
// Injected into the importer at construction time so tests and
// platform integrations can override behavior without touching
// the core logic.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Locale governing currency/separator handling in numeric cells
    pub locale: NumberLocale,

    /// Rows inspected by structure analysis (after summary filtering)
    pub preview_rows: usize,

    /// Extra (alias, canonical name) pairs merged over the built-in
    /// synonym table; aliases are normalized before insertion
    pub synonym_overrides: Vec<(String, String)>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::EnUs,
            preview_rows: 10,
            synonym_overrides: Vec::new(),
        }
    }
}

impl ImportConfig {
    pub fn with_locale(locale: NumberLocale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }
}
