//! Rule-based analysis engine
//!
//! The deterministic path: indicator extraction, deception detection, field
//! classification, website/document classification, compliance checks, and
//! the scoring pipeline, combined into one [`AnalysisResult`]. The engine
//! holds only compiled pattern tables; analysis is a pure function of the
//! snapshot, so concurrent requests need no coordination.

pub mod compliance;
pub mod deception;
pub mod fields;
pub mod indicators;
pub mod scorer;
pub mod terms;
pub mod website;

use crate::model::{
    AnalysisResult, Field, IndicatorKind, PageSnapshot, RiskIndicator, ScoringProfile,
};
use fields::{FieldCategory, FieldClassifier};
use scorer::{FieldCounts, ScoreInputs};

pub struct RuleEngine {
    fields: FieldClassifier,
    deception: deception::DeceptionDetector,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            fields: FieldClassifier::new(),
            deception: deception::DeceptionDetector::new(),
        }
    }

    /// Run only the deception patterns over free text.
    pub fn detect_deception(&self, text: &str) -> Vec<crate::model::DeceptionFinding> {
        self.deception.detect(text)
    }

    /// Analyze a snapshot. Deterministic: the same snapshot always yields an
    /// identical result.
    pub fn analyze(&self, snapshot: &PageSnapshot, profile: ScoringProfile) -> AnalysisResult {
        let text_lower = snapshot.text_lower();
        let is_legal = snapshot.is_legal_document;

        // Classification: caller-provided labels win, otherwise recompute.
        let website_type = snapshot
            .website_type
            .clone()
            .unwrap_or_else(|| website::classify_website(&snapshot.url, &snapshot.text));
        let document_type = if is_legal {
            Some(snapshot.document_type.clone().unwrap_or_else(|| {
                website::classify_document(&snapshot.url, &snapshot.text)
            }))
        } else {
            None
        };

        let mut red_flags = Vec::new();
        let mut privacy_threats = Vec::new();
        let mut brand_impersonation = Vec::new();

        if is_legal {
            match document_type.as_deref() {
                Some(doc) if doc.contains("privacy") => {
                    red_flags.push("Privacy policy detected - data collection practices".to_string())
                }
                Some(doc) if doc.contains("terms") => {
                    red_flags.push("Terms of service detected - user rights analysis".to_string())
                }
                _ => {}
            }
        } else {
            match website_type.as_str() {
                "social_media" => red_flags
                    .push("Social media platform detected - high data collection risk".to_string()),
                "financial" => red_flags
                    .push("Financial website detected - extremely sensitive data".to_string()),
                "ecommerce" => red_flags
                    .push("E-commerce website detected - payment data collection".to_string()),
                _ => {}
            }
        }

        // Field classification and per-category tallies.
        let (field_counts, sensitive_fields) =
            self.tally_fields(snapshot, is_legal, &mut privacy_threats);

        if field_counts.payment > 0 {
            red_flags.push(format!(
                "Found {} payment-related fields",
                field_counts.payment
            ));
        }
        if field_counts.identity > 0 {
            red_flags.push(format!(
                "Found {} government ID fields",
                field_counts.identity
            ));
        }

        // Indicators: engine extraction + deception patterns + scraper input.
        let deception_findings = self.deception.detect(&snapshot.text);
        let mut extracted = indicators::extract_indicators(&text_lower);
        extracted.extend(deception::DeceptionDetector::as_indicators(
            &deception_findings,
        ));
        let all_indicators = indicators::merge_indicators(extracted, &snapshot.risk_indicators);

        for indicator in &all_indicators {
            match indicator.kind {
                IndicatorKind::PrivacyTerm => {
                    privacy_threats.push(format!("Privacy term found: {}", indicator.term))
                }
                IndicatorKind::BrandImpersonation => {
                    brand_impersonation.push(format!("Brand impersonation: {}", indicator.term))
                }
                IndicatorKind::ConcerningLegalTerm => {
                    red_flags.push(format!("Concerning legal term: '{}'", indicator.term))
                }
                IndicatorKind::DataSharing => {
                    privacy_threats.push(format!("Data sharing clause: '{}'", indicator.term))
                }
                IndicatorKind::PaymentCollection => {
                    privacy_threats.push(format!("Payment data collection: {}", indicator.term))
                }
                IndicatorKind::DeceptiveLanguage => {
                    red_flags.push(format!("Deceptive language pattern: {}", indicator.term))
                }
            }
        }

        // Text-level scoring signals.
        let urgency = terms::matching_terms(&text_lower, terms::URGENCY_TERMS);
        for term in &urgency {
            red_flags.push(format!("Suspicious language detected: '{term}'"));
        }

        if snapshot.text.len() > 5000 {
            red_flags.push("Extensive content detected - potential data mining".to_string());
        }

        let tracking = terms::matching_terms(&text_lower, terms::TRACKING_TERMS);
        for term in &tracking {
            privacy_threats.push(format!("Third-party tracking detected: {term}"));
        }

        let user_rights = terms::count_distinct_matches(&text_lower, terms::USER_RIGHTS_TERMS);
        if is_legal && user_rights >= 3 {
            red_flags.push(format!(
                "Good user rights protection: {user_rights} rights found"
            ));
        }

        // Compliance checks run on every page; they self-gate on trigger
        // vocabulary.
        let ferpa_compliance = compliance::check_ferpa(&text_lower);
        let gdpr_compliance = compliance::check_gdpr(&text_lower);

        // Scoring pipeline.
        let inputs = ScoreInputs {
            is_legal_document: is_legal,
            document_type: document_type.as_deref(),
            website_type: &website_type,
            fields: field_counts,
            indicators: &all_indicators,
            urgency_matches: urgency.len(),
            text_length: snapshot.text.len(),
            tracking_matches: tracking.len(),
            user_rights_matches: user_rights,
        };
        let breakdown = scorer::compute_breakdown(&inputs);
        let risk_score = scorer::clamp_score(breakdown.total(), profile);
        let recommendation = scorer::bucket(risk_score, profile);

        tracing::debug!(
            url = %snapshot.url,
            raw_score = breakdown.total(),
            risk_score = risk_score,
            recommendation = %recommendation,
            indicators = all_indicators.len(),
            "Rule-based analysis scored"
        );

        let summary = if is_legal {
            format!(
                "Rule-based analysis completed - Legal document type: {}",
                document_type.as_deref().unwrap_or("unknown_document")
            )
        } else {
            format!("Rule-based analysis completed - Website type: {website_type}")
        };

        AnalysisResult {
            summary,
            risk_score,
            recommendation,
            red_flags,
            privacy_threats,
            brand_impersonation,
            deception_indicators: deception_findings,
            ferpa_compliance,
            gdpr_compliance,
            data_collection_analysis: format!(
                "Detected {} sensitive fields, {} risk indicators",
                sensitive_fields,
                all_indicators.len()
            ),
            website_type: if is_legal { None } else { Some(website_type) },
            document_type,
            is_legal_document: is_legal,
        }
    }

    /// Classify every field and reduce to per-category counts. Returns the
    /// counts plus the total number of sensitive fields.
    fn tally_fields(
        &self,
        snapshot: &PageSnapshot,
        is_legal: bool,
        privacy_threats: &mut Vec<String>,
    ) -> (FieldCounts, usize) {
        let mut counts = FieldCounts::default();

        for form in &snapshot.forms {
            for field in &form.fields {
                if !self.is_sensitive(field, is_legal) {
                    continue;
                }
                counts.sensitive_total += 1;

                match FieldClassifier::categorize(field) {
                    FieldCategory::Payment => {
                        counts.payment += 1;
                        privacy_threats.push(format!(
                            "Payment information field detected: {}",
                            field.name.to_lowercase()
                        ));
                    }
                    FieldCategory::Identity => {
                        counts.identity += 1;
                        privacy_threats.push(format!(
                            "Government ID field detected: {}",
                            field.name.to_lowercase()
                        ));
                    }
                    FieldCategory::Credential => {
                        if field.field_type.eq_ignore_ascii_case("password") {
                            privacy_threats.push("Password field detected".to_string());
                        } else {
                            privacy_threats.push("Email collection field detected".to_string());
                        }
                    }
                    FieldCategory::Other => {}
                }
            }
        }

        (counts, counts.sensitive_total)
    }

    /// On the legal-document path the scraper's `sensitive` flag is not
    /// trusted; elsewhere a caller-set flag can only add to the classifier's
    /// own verdict (monotonic OR).
    fn is_sensitive(&self, field: &Field, is_legal: bool) -> bool {
        let computed = self.fields.classify(field, is_legal);
        if is_legal {
            computed
        } else {
            computed || field.sensitive
        }
    }
}
