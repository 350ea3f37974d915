//! FERPA and GDPR compliance checks
//!
//! Presence/absence substring tests only. There is no negation handling and
//! no NLP; "we never sell your data" still matches "sell your data". This is
//! a documented limitation of the checkers, not something they try to paper
//! over.

use crate::service::engine::terms::FERPA_KEYWORDS;

const CONSENT_TERMS: &[&str] = &["consent", "permission", "authorize", "parental approval"];
const SHARING_LANGUAGE: &[&str] = &["third party", "third parties", "share", "disclose"];
const COMMERCIAL_LANGUAGE: &[&str] = &["marketing", "advertising", "commercial"];

/// FERPA issue scan. Only fires when student-record vocabulary is present;
/// each condition is tested independently and yields its own issue string.
pub fn check_ferpa(text_lower: &str) -> Vec<String> {
    let mut issues = Vec::new();

    let triggered = FERPA_KEYWORDS.iter().any(|k| text_lower.contains(k));
    if !triggered {
        return issues;
    }

    if !CONSENT_TERMS.iter().any(|t| text_lower.contains(t)) {
        issues.push(
            "Student records referenced without any consent or permission language".to_string(),
        );
    }

    if SHARING_LANGUAGE.iter().any(|t| text_lower.contains(t)) {
        issues.push("Student records may be shared with third parties".to_string());
    }

    if COMMERCIAL_LANGUAGE.iter().any(|t| text_lower.contains(t)) {
        issues.push("Student data appears alongside marketing or commercial use".to_string());
    }

    issues
}

/// GDPR issue scan. Only fires when "personal data" is present; each absence
/// condition yields its own issue string.
pub fn check_gdpr(text_lower: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if !text_lower.contains("personal data") {
        return issues;
    }

    if !text_lower.contains("right to be forgotten") {
        issues.push("No mention of the right to be forgotten".to_string());
    }

    if !text_lower.contains("data portability") {
        issues.push("No mention of data portability".to_string());
    }

    if text_lower.contains("consent") && !text_lower.contains("withdraw") {
        issues.push("Consent is requested without a way to withdraw it".to_string());
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ferpa_silent_without_trigger_keywords() {
        assert!(check_ferpa("we sell widgets with no warranty").is_empty());
    }

    #[test]
    fn ferpa_all_three_conditions() {
        let text = "student records are processed and we share them with third parties \
                    for marketing purposes";
        let issues = check_ferpa(text);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn ferpa_consent_language_clears_first_condition() {
        let text = "educational records require parental consent before we disclose them";
        let issues = check_ferpa(text);
        assert!(!issues.iter().any(|i| i.contains("without any consent")));
        // "disclose" still counts as sharing language; literal matching only,
        // so "disclosure" alone would not.
        assert!(issues.iter().any(|i| i.contains("third parties")));
        assert!(check_ferpa("student records subject to disclosure rules with consent")
            .is_empty());
    }

    #[test]
    fn gdpr_requires_personal_data_trigger() {
        assert!(check_gdpr("we value consent but offer no withdrawal").is_empty());
    }

    #[test]
    fn gdpr_absence_conditions() {
        let text = "we process personal data with your consent";
        let issues = check_gdpr(text);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn gdpr_complete_policy_has_no_issues() {
        let text = "personal data is handled per the right to be forgotten and data \
                    portability; you may withdraw consent at any time";
        assert!(check_gdpr(text).is_empty());
    }
}
