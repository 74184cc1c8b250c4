// ==========================================
// Traffic KPI Core - Column Normalizer
// ==========================================
// Stage 1: arbitrary/localized source column names ->
// canonical field names (static synonym table + string
// normalization); unmapped names pass through
// ==========================================

use std::collections::HashMap;

// ==========================================
// Default synonym table
// ==========================================
// Purely declarative: normalized alias -> canonical field name.
// Covers English, Portuguese, Spanish and German variants plus
// platform-specific aliases (Facebook/Google Ads exports).
// Keys are already in normalized form (lowercase, [a-z0-9] only).
const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    // date
    ("data", "date"),
    ("day", "date"),
    ("fecha", "date"),
    ("datum", "date"),
    ("dia", "date"),
    ("datestart", "date"),
    ("date", "date"),
    // impressions
    ("impressoes", "impressions"),
    ("impresiones", "impressions"),
    ("impressionen", "impressions"),
    ("impr", "impressions"),
    ("impressions", "impressions"),
    // clicks
    ("cliques", "clicks"),
    ("clics", "clicks"),
    ("klicks", "clicks"),
    ("linkclicks", "clicks"),
    ("clicksalllinked", "clicks"),
    ("websiteclicks", "clicks"),
    ("clicks", "clicks"),
    // cost
    ("custo", "cost"),
    ("costo", "cost"),
    ("kosten", "cost"),
    ("spend", "cost"),
    ("amountspent", "cost"),
    ("investment", "cost"),
    ("investimento", "cost"),
    ("adspend", "cost"),
    ("totalspend", "cost"),
    ("cost", "cost"),
    // conversions
    ("conversoes", "conversions"),
    ("conversiones", "conversions"),
    ("konversionen", "conversions"),
    ("conv", "conversions"),
    ("results", "conversions"),
    ("result", "conversions"),
    ("resultados", "conversions"),
    ("purchases", "conversions"),
    ("compras", "conversions"),
    ("conversions", "conversions"),
    // leads
    ("leads", "leads"),
    ("lead", "leads"),
    ("conversas", "leads"),
    ("conversaciones", "leads"),
    ("messages", "leads"),
    ("mensagens", "leads"),
    ("messagingconversationsstarted", "leads"),
    ("conversations", "leads"),
    // revenue
    ("receita", "revenue"),
    ("ingresos", "revenue"),
    ("einnahmen", "revenue"),
    ("revenue", "revenue"),
    ("purchasevalue", "revenue"),
    ("conversionvalue", "revenue"),
    ("sales", "revenue"),
    ("vendas", "revenue"),
    // reach
    ("alcance", "reach"),
    ("reichweite", "reach"),
    ("uniquereach", "reach"),
    ("peoplereached", "reach"),
    ("reach", "reach"),
    // campaign name
    ("campaignname", "campaignname"),
    ("campanha", "campaignname"),
    ("campana", "campaignname"),
    ("kampagne", "campaignname"),
    ("campaign", "campaignname"),
    ("nomecampanha", "campaignname"),
    // platform-reported derived metrics
    ("frequency", "frequency"),
    ("frequencia", "frequency"),
    ("costperresult", "cpl"),
    ("costpermessagingconversationsstarted", "cpl"),
    ("cpm", "cpm"),
    ("cpmcostper1000impressions", "cpm"),
    ("cpc", "cpc"),
    ("cpccostperlinkclick", "cpc"),
    ("ctr", "ctr"),
    ("ctrlinkclickthroughrate", "ctr"),
];

// ==========================================
// ColumnNormalizer
// ==========================================
// The synonym table is immutable after construction; overrides
// are merged at build time (test-time table swaps, platform
// extensions) without touching the lookup logic.
pub struct ColumnNormalizer {
    synonyms: HashMap<String, String>,
}

impl Default for ColumnNormalizer {
    fn default() -> Self {
        Self::with_overrides(&[])
    }
}

impl ColumnNormalizer {
    /// Build from the default table plus extra (alias, canonical)
    /// pairs; override aliases are normalized before insertion
    pub fn with_overrides(overrides: &[(String, String)]) -> Self {
        let mut synonyms: HashMap<String, String> = DEFAULT_SYNONYMS
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();

        for (alias, canonical) in overrides {
            synonyms.insert(Self::strip(alias), canonical.clone());
        }

        Self { synonyms }
    }

    /// Normalize a source column name to its canonical field name.
    ///
    /// Unrecognized names pass through in stripped form; they are
    /// treated as extra data downstream, never rejected. Never fails.
    pub fn normalize(&self, column_name: &str) -> String {
        let stripped = Self::strip(column_name);
        match self.synonyms.get(&stripped) {
            Some(canonical) => canonical.clone(),
            None => stripped,
        }
    }

    /// Lowercase and drop every character outside [a-z0-9]
    fn strip(column_name: &str) -> String {
        column_name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect()
    }
}
