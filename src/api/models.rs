use serde::{Deserialize, Serialize};

/// A single slogan suggestion with provenance and market metadata, produced by
/// the completion endpoint. Field values beyond the JSON shape are trusted as
/// constrained by the structured-output schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub slogan: String,
    pub related_keyword: String,
    pub source: String,
    pub search_volume: u64,
    pub started_trending: String,
    pub competition: String,
}

/// Ordered result of one scan; rendering order is generation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub trends: Vec<TrendRecord>,
}
