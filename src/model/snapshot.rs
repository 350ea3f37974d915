//! Input data model: the page snapshot produced by the scraping collaborator

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A captured web page as delivered by the scraper or browser extension.
///
/// The snapshot is immutable input: the engine never mutates it, and every
/// analysis of the same snapshot produces the same result.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    /// Page URL. Required.
    pub url: String,
    /// Forms found on the page, in document order. Required.
    pub forms: Vec<Form>,
    /// Visible text content. Required; truncated once at the boundary.
    pub text: String,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Indicators the scraper already detected. Merged with the engine's own
    /// extraction, de-duplicated by (type, term).
    #[serde(default)]
    pub risk_indicators: Vec<RiskIndicator>,
    #[serde(default)]
    pub is_legal_document: bool,
    /// Scraper-side document classification, e.g. "privacy_policy".
    /// Recomputed when absent.
    #[serde(default)]
    pub document_type: Option<String>,
    /// Scraper-side website classification. Recomputed when absent.
    #[serde(default)]
    pub website_type: Option<String>,
}

/// A single form on the page.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Form {
    pub fields: Vec<Field>,
}

/// A single form field.
///
/// `sensitive` is advisory from the scraper; the field classifier recomputes
/// it and never trusts the incoming value on the legal-document path.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub required: bool,
}

/// An image reference with the metadata the scraper extracts.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub brand_related: bool,
}

/// A detected phrase or pattern signalling a privacy, legal, or brand-trust
/// concern. Generated fresh per analysis, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RiskIndicator {
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
    pub term: String,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    PrivacyTerm,
    ConcerningLegalTerm,
    DataSharing,
    BrandImpersonation,
    PaymentCollection,
    DeceptiveLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl PageSnapshot {
    /// Lower-cased page text, computed once per analysis.
    pub fn text_lower(&self) -> String {
        self.text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_deserializes_scraper_payload() {
        let json = r#"{
            "url": "https://example.com/signup",
            "forms": [{"fields": [{"name": "email", "type": "email", "sensitive": true}]}],
            "text": "Welcome",
            "images": [{"alt": "logo", "src": "/logo.png", "brandRelated": true}],
            "riskIndicators": [{"type": "privacy_term", "term": "cookies", "risk": "high"}],
            "isLegalDocument": false
        }"#;

        let snapshot: PageSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.forms[0].fields[0].field_type, "email");
        assert!(snapshot.images[0].brand_related);
        assert_eq!(snapshot.risk_indicators[0].kind, IndicatorKind::PrivacyTerm);
        assert!(snapshot.document_type.is_none());
    }

    #[test]
    fn snapshot_rejects_missing_required_fields() {
        let json = r#"{"url": "https://example.com", "forms": []}"#;
        assert!(serde_json::from_str::<PageSnapshot>(json).is_err());
    }
}
