//! Output data model: the analysis result returned to callers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discrete, human-facing risk bucket derived from the numeric score.
///
/// Ordered by ascending severity; the derived `Ord` is relied on by tests
/// asserting "at least High Risk".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Recommendation {
    Safe,
    Moderate,
    Caution,
    #[serde(rename = "High Risk")]
    HighRisk,
    Dangerous,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Recommendation::Safe => "Safe",
            Recommendation::Moderate => "Moderate",
            Recommendation::Caution => "Caution",
            Recommendation::HighRisk => "High Risk",
            Recommendation::Dangerous => "Dangerous",
        };
        f.write_str(label)
    }
}

/// One matched deception pattern.
///
/// `examples` is bounded at 3 entries so a pathological page cannot blow up
/// the response size; `matches` still carries the full occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeceptionFinding {
    /// Indicator category; always `deceptive_language` for findings from the
    /// deception detector.
    #[serde(rename = "type")]
    pub kind: crate::model::IndicatorKind,
    /// Stable pattern identifier, e.g. "ambiguous_commitment".
    pub pattern: String,
    pub matches: usize,
    pub examples: Vec<String>,
}

/// Complete risk assessment for one page snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub summary: String,
    /// Clamped risk score: [0, 10] on the enhanced profile, [1, 10] legacy.
    pub risk_score: u8,
    pub recommendation: Recommendation,
    pub red_flags: Vec<String>,
    pub privacy_threats: Vec<String>,
    pub brand_impersonation: Vec<String>,
    pub deception_indicators: Vec<DeceptionFinding>,
    pub ferpa_compliance: Vec<String>,
    pub gdpr_compliance: Vec<String>,
    pub data_collection_analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    pub is_legal_document: bool,
}
