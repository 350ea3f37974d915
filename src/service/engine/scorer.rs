//! Risk score computation
//!
//! A deterministic pipeline of ordered, additive stages followed by clamping
//! and bucketing. Stage order matters: the adjustments are unbounded (within
//! finite tables) and only the final clamp constrains the result, so the
//! stages are kept as named functions with their own tests rather than
//! inline arithmetic.

use crate::model::{IndicatorKind, Recommendation, RiskIndicator, ScoringProfile};

/// Per-category sensitive field tallies from the field classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCounts {
    pub payment: usize,
    pub identity: usize,
    /// Every sensitive field, payment and identity ones included; the flat
    /// +1 stage counts them all on top of the category bonuses.
    pub sensitive_total: usize,
}

/// Everything the scorer looks at, already reduced to counts and labels.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub is_legal_document: bool,
    pub document_type: Option<&'a str>,
    pub website_type: &'a str,
    pub fields: FieldCounts,
    pub indicators: &'a [RiskIndicator],
    pub urgency_matches: usize,
    pub text_length: usize,
    pub tracking_matches: usize,
    pub user_rights_matches: usize,
}

/// Per-stage contributions, exposed for stage-level testing and for the
/// data-collection summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub category: i32,
    pub fields: i32,
    pub indicators: i32,
    pub urgency: i32,
    pub volume: i32,
    pub tracking: i32,
    pub rights_credit: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.base
            + self.category
            + self.fields
            + self.indicators
            + self.urgency
            + self.volume
            + self.tracking
            + self.rights_credit
    }
}

/// Run every stage in order.
pub fn compute_breakdown(inputs: &ScoreInputs<'_>) -> ScoreBreakdown {
    ScoreBreakdown {
        base: base_score(inputs),
        category: category_adjustment(inputs),
        fields: field_adjustment(inputs.fields),
        indicators: indicator_adjustment(inputs.indicators, inputs.is_legal_document),
        urgency: inputs.urgency_matches as i32,
        volume: volume_adjustment(inputs.text_length),
        tracking: inputs.tracking_matches as i32,
        rights_credit: rights_credit(inputs),
    }
}

/// Stage 1: base score. General pages start at 1; legal documents add a
/// document-type base on top (privacy policies carry inherent data
/// collection, terms of service carry user-rights implications).
fn base_score(inputs: &ScoreInputs<'_>) -> i32 {
    let mut base = 1;

    if inputs.is_legal_document {
        match inputs.document_type {
            Some(doc) if doc.contains("privacy") => base += 2,
            Some(doc) if doc.contains("terms") => base += 1,
            _ => {}
        }
    }

    base
}

/// Stage 2: website category delta. Mutually exclusive with the legal
/// document-type base - a legal document never receives both bonuses.
///
/// Labels are matched by containment so coarser scraper-supplied labels
/// ("social", "banking") earn the same delta as the engine's own exact
/// labels.
fn category_adjustment(inputs: &ScoreInputs<'_>) -> i32 {
    if inputs.is_legal_document {
        return 0;
    }

    let label = inputs.website_type;
    if label.contains("social") {
        3
    } else if label.contains("financ") || label.contains("bank") {
        4
    } else if label.contains("commerce") || label.contains("shop") {
        2
    } else if label.contains("edu") {
        1
    } else {
        0
    }
}

/// Stage 3: sensitive field adjustment. Each category has an independent cap
/// so a single large form cannot dominate the score.
fn field_adjustment(fields: FieldCounts) -> i32 {
    let payment = (fields.payment as i32 * 3).min(6);
    let identity = (fields.identity as i32 * 4).min(8);
    let sensitive = (fields.sensitive_total as i32).min(3);
    payment + identity + sensitive
}

/// Stage 4: indicator adjustment. The general path adds +1 per indicator;
/// the legal-document path weights concerning legal terms at +2 and data
/// sharing clauses at +3 above the generic rate.
fn indicator_adjustment(indicators: &[RiskIndicator], is_legal_document: bool) -> i32 {
    indicators
        .iter()
        .map(|indicator| {
            if is_legal_document {
                match indicator.kind {
                    IndicatorKind::ConcerningLegalTerm => 2,
                    IndicatorKind::DataSharing => 3,
                    _ => 1,
                }
            } else {
                1
            }
        })
        .sum()
}

/// Stage 6: volume adjustment. Long pages are a proxy for extensive
/// forms/surveys and data harvesting.
fn volume_adjustment(text_length: usize) -> i32 {
    if text_length > 5000 {
        1
    } else {
        0
    }
}

/// Stage 8: user-rights credit, legal documents only. Three or more distinct
/// rights terms pull the score down by one; this is the only negative stage.
fn rights_credit(inputs: &ScoreInputs<'_>) -> i32 {
    if inputs.is_legal_document && inputs.user_rights_matches >= 3 {
        -1
    } else {
        0
    }
}

/// Stage 9: clamp to the profile's interval.
pub fn clamp_score(raw: i32, profile: ScoringProfile) -> u8 {
    let (lo, hi) = match profile {
        ScoringProfile::Enhanced => (0, 10),
        ScoringProfile::Legacy => (1, 10),
    };
    raw.clamp(lo, hi) as u8
}

/// Stage 10: bucket the clamped score, evaluated from the highest boundary
/// down.
pub fn bucket(score: u8, profile: ScoringProfile) -> Recommendation {
    match profile {
        ScoringProfile::Enhanced => {
            if score >= 8 {
                Recommendation::Dangerous
            } else if score >= 6 {
                Recommendation::HighRisk
            } else if score >= 4 {
                Recommendation::Caution
            } else if score >= 2 {
                Recommendation::Moderate
            } else {
                Recommendation::Safe
            }
        }
        ScoringProfile::Legacy => {
            if score >= 7 {
                Recommendation::Dangerous
            } else if score >= 4 {
                Recommendation::Caution
            } else {
                Recommendation::Safe
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;

    fn indicator(kind: IndicatorKind) -> RiskIndicator {
        RiskIndicator {
            kind,
            term: "x".to_string(),
            risk: RiskLevel::High,
        }
    }

    fn inputs<'a>(indicators: &'a [RiskIndicator]) -> ScoreInputs<'a> {
        ScoreInputs {
            is_legal_document: false,
            document_type: None,
            website_type: "general",
            fields: FieldCounts::default(),
            indicators,
            urgency_matches: 0,
            text_length: 0,
            tracking_matches: 0,
            user_rights_matches: 0,
        }
    }

    #[test]
    fn base_is_one_for_general_pages() {
        assert_eq!(base_score(&inputs(&[])), 1);
    }

    #[test]
    fn legal_bases_by_document_type() {
        let mut i = inputs(&[]);
        i.is_legal_document = true;
        i.document_type = Some("privacy_policy");
        assert_eq!(base_score(&i), 3);

        i.document_type = Some("terms_of_service");
        assert_eq!(base_score(&i), 2);

        i.document_type = Some("cookie_policy");
        assert_eq!(base_score(&i), 1);
    }

    #[test]
    fn category_bonus_accepts_coarse_labels() {
        let mut i = inputs(&[]);
        for (label, delta) in [
            ("social_media", 3),
            ("social", 3),
            ("financial", 4),
            ("banking", 4),
            ("ecommerce", 2),
            ("shopping", 2),
            ("educational", 1),
            ("edu", 1),
            ("general", 0),
        ] {
            i.website_type = label;
            assert_eq!(category_adjustment(&i), delta, "label {label}");
        }
    }

    #[test]
    fn category_bonus_skipped_for_legal_documents() {
        let mut i = inputs(&[]);
        i.website_type = "financial";
        assert_eq!(category_adjustment(&i), 4);

        i.is_legal_document = true;
        assert_eq!(category_adjustment(&i), 0);
    }

    #[test]
    fn field_caps_are_independent() {
        let fields = FieldCounts {
            payment: 5,
            identity: 5,
            sensitive_total: 20,
        };
        // 6 + 8 + 3, each capped on its own.
        assert_eq!(field_adjustment(fields), 17);
    }

    #[test]
    fn field_adjustment_below_caps() {
        let fields = FieldCounts {
            payment: 1,
            identity: 1,
            sensitive_total: 4,
        };
        // 3 + 4 + min(4, 3)
        assert_eq!(field_adjustment(fields), 10);
    }

    #[test]
    fn single_identity_field_scores_five() {
        let fields = FieldCounts {
            payment: 0,
            identity: 1,
            sensitive_total: 1,
        };
        assert_eq!(field_adjustment(fields), 5);
    }

    #[test]
    fn legal_path_weights_sharing_and_legal_terms() {
        let indicators = vec![
            indicator(IndicatorKind::ConcerningLegalTerm),
            indicator(IndicatorKind::DataSharing),
            indicator(IndicatorKind::PrivacyTerm),
        ];
        assert_eq!(indicator_adjustment(&indicators, false), 3);
        assert_eq!(indicator_adjustment(&indicators, true), 6);
    }

    #[test]
    fn rights_credit_requires_legal_document_and_three_terms() {
        let mut i = inputs(&[]);
        i.user_rights_matches = 3;
        assert_eq!(rights_credit(&i), 0);

        i.is_legal_document = true;
        assert_eq!(rights_credit(&i), -1);

        i.user_rights_matches = 2;
        assert_eq!(rights_credit(&i), 0);
    }

    #[test]
    fn clamp_ranges_differ_by_profile() {
        assert_eq!(clamp_score(-2, ScoringProfile::Enhanced), 0);
        assert_eq!(clamp_score(-2, ScoringProfile::Legacy), 1);
        assert_eq!(clamp_score(0, ScoringProfile::Legacy), 1);
        assert_eq!(clamp_score(25, ScoringProfile::Enhanced), 10);
        assert_eq!(clamp_score(25, ScoringProfile::Legacy), 10);
    }

    #[test]
    fn enhanced_bucket_boundaries() {
        assert_eq!(bucket(8, ScoringProfile::Enhanced), Recommendation::Dangerous);
        assert_eq!(bucket(7, ScoringProfile::Enhanced), Recommendation::HighRisk);
        assert_eq!(bucket(6, ScoringProfile::Enhanced), Recommendation::HighRisk);
        assert_eq!(bucket(5, ScoringProfile::Enhanced), Recommendation::Caution);
        assert_eq!(bucket(4, ScoringProfile::Enhanced), Recommendation::Caution);
        assert_eq!(bucket(3, ScoringProfile::Enhanced), Recommendation::Moderate);
        assert_eq!(bucket(2, ScoringProfile::Enhanced), Recommendation::Moderate);
        assert_eq!(bucket(1, ScoringProfile::Enhanced), Recommendation::Safe);
        assert_eq!(bucket(0, ScoringProfile::Enhanced), Recommendation::Safe);
    }

    #[test]
    fn legacy_bucket_boundaries() {
        assert_eq!(bucket(7, ScoringProfile::Legacy), Recommendation::Dangerous);
        assert_eq!(bucket(6, ScoringProfile::Legacy), Recommendation::Caution);
        assert_eq!(bucket(4, ScoringProfile::Legacy), Recommendation::Caution);
        assert_eq!(bucket(3, ScoringProfile::Legacy), Recommendation::Safe);
    }

    #[test]
    fn breakdown_total_sums_stages() {
        let indicators = vec![indicator(IndicatorKind::PrivacyTerm)];
        let mut i = inputs(&indicators);
        i.website_type = "ecommerce";
        i.fields = FieldCounts {
            payment: 1,
            identity: 0,
            sensitive_total: 1,
        };
        i.urgency_matches = 2;
        i.text_length = 6000;
        i.tracking_matches = 1;

        let breakdown = compute_breakdown(&i);
        // 1 + 2 + 4 + 1 + 2 + 1 + 1 + 0
        assert_eq!(breakdown.total(), 12);
        assert_eq!(clamp_score(breakdown.total(), ScoringProfile::Enhanced), 10);
    }
}
