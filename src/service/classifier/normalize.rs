//! Defensive normalization of LLM classifier output
//!
//! The classifier response is free text that usually, but not always,
//! contains a JSON object. This module turns whatever came back into a
//! complete [`AnalysisResult`]: parse the JSON slice when one exists,
//! fall back to keyword sniffing otherwise, and default every missing
//! field so callers never see a partial result.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{AnalysisResult, ExtractedAnalysis, PageSnapshot, Recommendation};

const DEFAULT_RISK_SCORE: i64 = 5;
const MAX_FALLBACK_FLAGS: usize = 5;

static RISK_SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)risk_score["\s]*:["\s]*(\d+)"#).unwrap());

/// Normalize a raw classifier response into a complete result.
///
/// The snapshot supplies the page-level labels the classifier does not
/// report (website type, document type, legal-document flag).
pub fn normalize_response(response_text: &str, snapshot: &PageSnapshot) -> AnalysisResult {
    if let Some(extracted) = extract_json(response_text) {
        return from_extracted(extracted, snapshot);
    }
    from_keywords(response_text, snapshot)
}

/// Locate and parse the outermost JSON object in the response, if any.
fn extract_json(response_text: &str) -> Option<ExtractedAnalysis> {
    let start = response_text.find('{')?;
    let end = response_text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&response_text[start..=end]).ok()
}

fn from_extracted(extracted: ExtractedAnalysis, snapshot: &PageSnapshot) -> AnalysisResult {
    let risk_score = extracted
        .risk_score
        .unwrap_or(DEFAULT_RISK_SCORE)
        .clamp(0, 10) as u8;

    let recommendation = extracted
        .recommendation
        .as_deref()
        .and_then(parse_recommendation)
        .unwrap_or(Recommendation::Caution);

    AnalysisResult {
        summary: extracted
            .summary
            .unwrap_or_else(|| "Analysis completed".to_string()),
        risk_score,
        recommendation,
        red_flags: extracted.red_flags.unwrap_or_default(),
        privacy_threats: extracted.privacy_threats.unwrap_or_default(),
        brand_impersonation: extracted.brand_impersonation.unwrap_or_default(),
        deception_indicators: Vec::new(),
        ferpa_compliance: Vec::new(),
        gdpr_compliance: Vec::new(),
        data_collection_analysis: extracted
            .data_collection_analysis
            .unwrap_or_else(|| "Analysis completed".to_string()),
        website_type: snapshot.website_type.clone(),
        document_type: snapshot.document_type.clone(),
        is_legal_document: snapshot.is_legal_document,
    }
}

/// Salvage a verdict from a response with no parseable JSON.
fn from_keywords(response_text: &str, snapshot: &PageSnapshot) -> AnalysisResult {
    let lower = response_text.to_lowercase();

    let mut risk_score = RISK_SCORE_RE
        .captures(response_text)
        .and_then(|c| c[1].parse::<i64>().ok())
        .unwrap_or(DEFAULT_RISK_SCORE)
        .clamp(0, 10);

    // "dangerous" wins over "safe" when both appear.
    let recommendation = if lower.contains("dangerous") {
        risk_score = risk_score.max(7);
        Recommendation::Dangerous
    } else if lower.contains("safe") {
        risk_score = risk_score.min(3);
        Recommendation::Safe
    } else {
        Recommendation::Caution
    };

    let red_flags: Vec<String> = response_text
        .lines()
        .map(str::trim)
        .filter(|line| {
            let line = line.to_lowercase();
            !line.is_empty()
                && ["privacy", "data", "collection", "brand", "fake", "unauthorized"]
                    .iter()
                    .any(|kw| line.contains(kw))
        })
        .take(MAX_FALLBACK_FLAGS)
        .map(str::to_string)
        .collect();

    AnalysisResult {
        summary: "Analysis completed".to_string(),
        risk_score: risk_score as u8,
        recommendation,
        red_flags,
        privacy_threats: Vec::new(),
        brand_impersonation: Vec::new(),
        deception_indicators: Vec::new(),
        ferpa_compliance: Vec::new(),
        gdpr_compliance: Vec::new(),
        data_collection_analysis: "Analysis completed".to_string(),
        website_type: snapshot.website_type.clone(),
        document_type: snapshot.document_type.clone(),
        is_legal_document: snapshot.is_legal_document,
    }
}

fn parse_recommendation(raw: &str) -> Option<Recommendation> {
    match raw.trim().to_lowercase().as_str() {
        "safe" => Some(Recommendation::Safe),
        "moderate" => Some(Recommendation::Moderate),
        "caution" => Some(Recommendation::Caution),
        "high risk" => Some(Recommendation::HighRisk),
        "dangerous" => Some(Recommendation::Dangerous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> PageSnapshot {
        serde_json::from_str(
            r#"{"url": "https://example.com", "forms": [], "text": "hello",
                "websiteType": "educational"}"#,
        )
        .unwrap()
    }

    #[test]
    fn complete_json_passes_through() {
        let response = r#"Here is my analysis:
        {"summary": "Collects too much", "risk_score": 8, "recommendation": "High Risk",
         "red_flags": ["excessive collection"], "privacy_threats": ["third-party sharing"],
         "brand_impersonation": [], "data_collection_analysis": "Broad collection"}"#;

        let result = normalize_response(response, &snapshot());
        assert_eq!(result.risk_score, 8);
        assert_eq!(result.recommendation, Recommendation::HighRisk);
        assert_eq!(result.red_flags, vec!["excessive collection"]);
        assert_eq!(result.website_type.as_deref(), Some("educational"));
    }

    #[test]
    fn partial_json_gets_defaults() {
        let result = normalize_response(r#"{"recommendation": "Safe"}"#, &snapshot());
        assert_eq!(result.risk_score, 5);
        assert_eq!(result.recommendation, Recommendation::Safe);
        assert!(result.red_flags.is_empty());
        assert_eq!(result.summary, "Analysis completed");
    }

    #[test]
    fn out_of_range_score_is_clamped() {
        let result = normalize_response(r#"{"risk_score": 42}"#, &snapshot());
        assert_eq!(result.risk_score, 10);
        let result = normalize_response(r#"{"risk_score": -3}"#, &snapshot());
        assert_eq!(result.risk_score, 0);
    }

    #[test]
    fn unknown_recommendation_defaults_to_caution() {
        let result = normalize_response(r#"{"recommendation": "Catastrophic"}"#, &snapshot());
        assert_eq!(result.recommendation, Recommendation::Caution);
    }

    #[test]
    fn plain_text_dangerous_overrides_safe() {
        let result =
            normalize_response("This page is dangerous, not safe. risk_score: 4", &snapshot());
        assert_eq!(result.recommendation, Recommendation::Dangerous);
        assert_eq!(result.risk_score, 7);
    }

    #[test]
    fn plain_text_safe_caps_score() {
        let result = normalize_response("Looks safe overall. risk_score: 6", &snapshot());
        assert_eq!(result.recommendation, Recommendation::Safe);
        assert_eq!(result.risk_score, 3);
    }

    #[test]
    fn fallback_flags_are_bounded() {
        let text = (0..10)
            .map(|i| format!("Concern {i}: excessive data collection"))
            .collect::<Vec<_>>()
            .join("\n");
        let result = normalize_response(&text, &snapshot());
        assert_eq!(result.red_flags.len(), MAX_FALLBACK_FLAGS);
        assert_eq!(result.recommendation, Recommendation::Caution);
    }
}
