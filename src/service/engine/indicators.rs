//! Indicator extraction from page text
//!
//! Pure function of (lower-cased text, static tables). Each matched table
//! entry produces exactly one indicator regardless of how often the term
//! occurs; output order is table order, then term order within a table.

use crate::model::{IndicatorKind, RiskIndicator};
use crate::service::engine::terms::INDICATOR_TABLES;

/// Scan `text_lower` against every indicator table.
pub fn extract_indicators(text_lower: &str) -> Vec<RiskIndicator> {
    let mut indicators = Vec::new();

    for table in INDICATOR_TABLES {
        for term in table.terms {
            if text_lower.contains(term) {
                indicators.push(RiskIndicator {
                    kind: table.kind,
                    term: (*term).to_string(),
                    risk: table.risk,
                });
            }
        }
    }

    indicators
}

/// Merge caller-provided indicators into the extracted set.
///
/// The scraper runs its own scan before submitting a snapshot, so the same
/// term frequently arrives twice. Extracted indicators come first; provided
/// indicators are appended only when their (type, term) pair is new.
pub fn merge_indicators(
    extracted: Vec<RiskIndicator>,
    provided: &[RiskIndicator],
) -> Vec<RiskIndicator> {
    let mut merged = extracted;

    for indicator in provided {
        let seen = merged
            .iter()
            .any(|m| m.kind == indicator.kind && m.term.eq_ignore_ascii_case(&indicator.term));
        if !seen {
            merged.push(indicator.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskLevel;

    #[test]
    fn one_indicator_per_matched_term() {
        let text = "we use cookies. cookies are great. more cookies.";
        let indicators = extract_indicators(text);
        let cookie_count = indicators.iter().filter(|i| i.term == "cookies").count();
        assert_eq!(cookie_count, 1);
    }

    #[test]
    fn indicators_follow_category_order() {
        let text = "perpetual license applies; we sell your data; uses personal information";
        let kinds: Vec<IndicatorKind> = extract_indicators(text).iter().map(|i| i.kind).collect();
        let privacy = kinds
            .iter()
            .position(|k| *k == IndicatorKind::PrivacyTerm)
            .unwrap();
        let legal = kinds
            .iter()
            .position(|k| *k == IndicatorKind::ConcerningLegalTerm)
            .unwrap();
        let sharing = kinds
            .iter()
            .position(|k| *k == IndicatorKind::DataSharing)
            .unwrap();
        assert!(privacy < legal && legal < sharing);
    }

    #[test]
    fn no_match_means_no_indicators() {
        assert!(extract_indicators("a perfectly innocuous page").is_empty());
    }

    #[test]
    fn merge_deduplicates_by_type_and_term() {
        let extracted = extract_indicators("we use cookies");
        assert_eq!(extracted.len(), 1);

        let provided = vec![
            RiskIndicator {
                kind: IndicatorKind::PrivacyTerm,
                term: "cookies".to_string(),
                risk: RiskLevel::High,
            },
            RiskIndicator {
                kind: IndicatorKind::PaymentCollection,
                term: "wire transfer".to_string(),
                risk: RiskLevel::High,
            },
        ];

        let merged = merge_indicators(extracted, &provided);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].term, "wire transfer");
    }
}
