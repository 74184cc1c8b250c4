// ==========================================
// Traffic KPI Core - Shared Domain Types
// ==========================================
// Canonical field enumeration + classification enums
// used across the importer and the KPI engine
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CanonicalField - Canonical column identity
// ==========================================
// Every recognized source column resolves to one of these.
// The lower-case name doubles as the normalized row-map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    // ===== Traffic metrics =====
    Date,
    Impressions,
    Clicks,
    Cost,
    Conversions,
    Leads,
    Revenue,
    Reach,
    CampaignName,

    // ===== Platform-reported derived metrics (passthrough) =====
    Frequency,
    Cpl,
    Cpm,
    Cpc,
    Ctr,

    // ===== Social media extension set =====
    Likes,
    Comments,
    Shares,
    Followers,
    Engagement,
    Posts,
    Stories,
    Reels,
    Saves,
    ProfileVisits,
}

impl CanonicalField {
    /// Canonical lower-case name (normalized row-map key)
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::Date => "date",
            CanonicalField::Impressions => "impressions",
            CanonicalField::Clicks => "clicks",
            CanonicalField::Cost => "cost",
            CanonicalField::Conversions => "conversions",
            CanonicalField::Leads => "leads",
            CanonicalField::Revenue => "revenue",
            CanonicalField::Reach => "reach",
            CanonicalField::CampaignName => "campaignname",
            CanonicalField::Frequency => "frequency",
            CanonicalField::Cpl => "cpl",
            CanonicalField::Cpm => "cpm",
            CanonicalField::Cpc => "cpc",
            CanonicalField::Ctr => "ctr",
            CanonicalField::Likes => "likes",
            CanonicalField::Comments => "comments",
            CanonicalField::Shares => "shares",
            CanonicalField::Followers => "followers",
            CanonicalField::Engagement => "engagement",
            CanonicalField::Posts => "posts",
            CanonicalField::Stories => "stories",
            CanonicalField::Reels => "reels",
            CanonicalField::Saves => "saves",
            CanonicalField::ProfileVisits => "profilevisits",
        }
    }

    /// The four fields every upload must resolve before full parsing
    pub const REQUIRED_FOR_MAPPING: &'static [CanonicalField] = &[
        CanonicalField::Date,
        CanonicalField::Impressions,
        CanonicalField::Clicks,
        CanonicalField::Cost,
    ];
}

// ==========================================
// FieldKind - Semantic type of a field rule
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Text,
    Date,
}

// ==========================================
// DatasetKind - Which rule set applies
// ==========================================
// Social extends the traffic rules with the social media fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Traffic,
    Social,
}

// ==========================================
// NumberLocale - Numeric coercion locale
// ==========================================
// EnUs: "," thousands separator, "." decimal mark
// PtBr: "." thousands separator, "," decimal mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberLocale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
}

// ==========================================
// Trend - Per-metric direction classification
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

// ==========================================
// BenchmarkTier - CTR / ROAS benchmark status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkTier {
    Excellent,
    Good,
    Average,
    Poor,
}

// ==========================================
// CpcTier - CPC benchmark status
// ==========================================
// CPC is a cost metric, so the bottom tier reads "expensive"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpcTier {
    Excellent,
    Good,
    Average,
    Expensive,
}

// ==========================================
// QualityLevel - Data quality classification
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}
