//! Serde view of raw LLM classifier output
//!
//! Every field is optional: the classifier is never trusted to return a
//! complete object. Normalization into [`AnalysisResult`] happens in
//! `service::classifier::normalize`.
//!
//! [`AnalysisResult`]: crate::model::AnalysisResult

use serde::Deserialize;

/// Structured analysis as the LLM reports it, before defaulting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedAnalysis {
    pub summary: Option<String>,
    /// Reported as a bare number; clamped into range during normalization.
    pub risk_score: Option<i64>,
    pub recommendation: Option<String>,
    pub red_flags: Option<Vec<String>>,
    pub privacy_threats: Option<Vec<String>>,
    pub brand_impersonation: Option<Vec<String>>,
    pub data_collection_analysis: Option<String>,
}
