//! Form field sensitivity classification
//!
//! A field is sensitive when its name or placeholder matches any sensitivity
//! fragment, or its declared type is in the sensitive-type set. The predicate
//! is a monotonic OR over immutable inputs: once a rule fires the field is
//! sensitive, no rule un-marks it, and reclassifying is a no-op.

use regex::Regex;

use crate::model::Field;

/// Name/placeholder fragments that mark a field sensitive.
const SENSITIVE_FRAGMENTS: &[&str] = &[
    "email", "password", "phone", "mobile", "address", "ssn", "social", "security", "id",
    "student", "name", "first", "last", "birth", "age", "income", "salary", "financial", "bank",
    "credit", "card", "payment", "paypal", "stripe", "venmo", "account", "login", "username",
    "passport", "driver",
];

/// Additional fragments that only apply when classifying fields on a legal
/// document (consent widgets on policy pages collect agreement state).
const LEGAL_DOC_FRAGMENTS: &[&str] = &["consent", "agreement", "accept", "opt-in", "opt-out"];

/// Field types that are sensitive by declaration alone.
const SENSITIVE_TYPES: &[&str] = &["password", "email", "tel", "date", "file", "number"];

/// Name fragments that mark a sensitive field as payment-related.
const PAYMENT_NAME_TERMS: &[&str] = &["card", "credit", "payment", "paypal", "stripe"];

/// Name fragments that mark a sensitive field as identity / government-ID.
const IDENTITY_NAME_TERMS: &[&str] = &["ssn", "social", "security", "id", "passport"];

/// Compiled sensitivity matcher.
pub struct FieldClassifier {
    fragments: Regex,
    legal_fragments: Regex,
}

/// Non-exclusive sub-classification of a sensitive field, consumed by the
/// risk scorer's field stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCategory {
    Payment,
    Identity,
    Credential,
    Other,
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldClassifier {
    pub fn new() -> Self {
        Self {
            fragments: Regex::new(&SENSITIVE_FRAGMENTS.join("|")).unwrap(),
            legal_fragments: Regex::new(
                &[SENSITIVE_FRAGMENTS, LEGAL_DOC_FRAGMENTS].concat().join("|"),
            )
            .unwrap(),
        }
    }

    /// Recompute `sensitive` for one field. Idempotent.
    pub fn classify(&self, field: &Field, legal_document: bool) -> bool {
        let name = field.name.to_lowercase();
        let placeholder = field.placeholder.to_lowercase();
        let field_type = field.field_type.to_lowercase();

        let fragments = if legal_document {
            &self.legal_fragments
        } else {
            &self.fragments
        };

        let type_sensitive = SENSITIVE_TYPES.contains(&field_type.as_str())
            || (legal_document && field_type == "checkbox");

        type_sensitive || fragments.is_match(&name) || fragments.is_match(&placeholder)
    }

    /// Sub-classify an already-sensitive field.
    pub fn categorize(field: &Field) -> FieldCategory {
        let name = field.name.to_lowercase();
        let field_type = field.field_type.to_lowercase();

        if PAYMENT_NAME_TERMS.iter().any(|t| name.contains(t)) {
            FieldCategory::Payment
        } else if IDENTITY_NAME_TERMS.iter().any(|t| name.contains(t)) {
            FieldCategory::Identity
        } else if field_type == "password" || field_type == "email" {
            FieldCategory::Credential
        } else {
            FieldCategory::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, field_type: &str, placeholder: &str) -> Field {
        Field {
            name: name.to_string(),
            field_type: field_type.to_string(),
            placeholder: placeholder.to_string(),
            sensitive: false,
            required: false,
        }
    }

    #[test]
    fn sensitive_by_name() {
        let classifier = FieldClassifier::new();
        assert!(classifier.classify(&field("user_email", "text", ""), false));
        assert!(classifier.classify(&field("ssn", "text", ""), false));
        assert!(!classifier.classify(&field("favorite_color", "text", ""), false));
    }

    #[test]
    fn sensitive_by_placeholder() {
        let classifier = FieldClassifier::new();
        assert!(classifier.classify(&field("q", "text", "Enter your phone"), false));
    }

    #[test]
    fn sensitive_by_type() {
        let classifier = FieldClassifier::new();
        assert!(classifier.classify(&field("x", "password", ""), false));
        assert!(classifier.classify(&field("x", "file", ""), false));
        assert!(!classifier.classify(&field("x", "text", ""), false));
    }

    #[test]
    fn checkbox_sensitive_only_on_legal_documents() {
        let classifier = FieldClassifier::new();
        let consent = field("remember", "checkbox", "");
        assert!(!classifier.classify(&consent, false));
        assert!(classifier.classify(&consent, true));
    }

    #[test]
    fn consent_fragments_only_on_legal_documents() {
        let classifier = FieldClassifier::new();
        let opt_in = field("opt-in", "text", "");
        assert!(!classifier.classify(&opt_in, false));
        assert!(classifier.classify(&opt_in, true));
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = FieldClassifier::new();
        let mut f = field("credit_card", "text", "");
        f.sensitive = classifier.classify(&f, false);
        let again = classifier.classify(&f, false);
        assert_eq!(f.sensitive, again);
    }

    #[test]
    fn categorization() {
        assert_eq!(
            FieldClassifier::categorize(&field("credit_card_number", "text", "")),
            FieldCategory::Payment
        );
        assert_eq!(
            FieldClassifier::categorize(&field("passport_no", "text", "")),
            FieldCategory::Identity
        );
        assert_eq!(
            FieldClassifier::categorize(&field("pw", "password", "")),
            FieldCategory::Credential
        );
        assert_eq!(
            FieldClassifier::categorize(&field("nickname", "text", "")),
            FieldCategory::Other
        );
    }
}
