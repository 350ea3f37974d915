//! Static term tables for indicator extraction and scoring
//!
//! These lists are version-controlled data: changing an entry changes
//! analysis output, so they live here as first-class artifacts rather than
//! inline in the scanning code. All matching is lower-case substring
//! containment; the tables are stored lower-case.

use crate::model::{IndicatorKind, RiskLevel};

/// Privacy and data-collection terms. "personal data" is deliberately
/// absent: it is the GDPR trigger phrase, not an indicator on its own.
pub const PRIVACY_TERMS: &[&str] = &[
    "personal information",
    "data collection",
    "tracking",
    "cookies",
    "third party",
    "advertising",
    "marketing",
    "analytics",
    "social security",
    "ssn",
    "income",
    "financial",
    "privacy policy",
    "terms of service",
    "data sharing",
    "user data",
    "profile",
    "account",
    "consent",
    "opt-in",
    "opt-out",
    "data retention",
    "data processing",
    "data transfer",
    "international transfer",
    "right to delete",
    "right to access",
    "data portability",
    "automated decision making",
    "profiling",
    "surveillance",
];

/// Concerning legal terms: liability disclaimers, arbitration clauses,
/// broad license grants.
pub const LEGAL_RISK_TERMS: &[&str] = &[
    "disclaim all liability",
    "not responsible",
    "use at your own risk",
    "no warranty",
    "as is",
    "without limitation",
    "broad rights",
    "perpetual license",
    "irrevocable",
    "transferable",
    "sublicensable",
    "right to modify",
    "right to terminate",
    "right to suspend",
    "arbitration clause",
    "class action waiver",
    "governing law",
    "jurisdiction",
    "venue",
    "choice of law",
    "binding arbitration",
];

/// Data-sharing and third-party disclosure terms.
pub const SHARING_TERMS: &[&str] = &[
    "share with third parties",
    "sell your data",
    "data brokers",
    "advertising partners",
    "marketing partners",
    "analytics partners",
    "social media integration",
    "third-party cookies",
    "tracking pixels",
    "beacons",
    "fingerprinting",
    "cross-site tracking",
];

/// Brand impersonation and scam-adjacent trust claims.
pub const BRAND_TERMS: &[&str] = &[
    "google certified",
    "microsoft certified",
    "apple certified",
    "official partner",
    "verified by",
    "endorsed by",
    "government grant",
    "tax refund",
    "inheritance",
];

/// Payment and financial-instrument terms.
pub const PAYMENT_TERMS: &[&str] = &[
    "credit card",
    "debit card",
    "bank account",
    "routing number",
    "account number",
    "paypal",
    "stripe",
    "venmo",
    "zelle",
    "bitcoin",
    "cryptocurrency",
    "wallet",
];

/// Urgency and scam-pressure phrases. Each distinct match adds to the
/// suspicious-language scoring stage, independent of the indicator tables.
pub const URGENCY_TERMS: &[&str] = &[
    "urgent",
    "limited time",
    "act now",
    "exclusive offer",
    "guaranteed",
    "100% free",
    "no risk",
    "instant access",
    "government grant",
    "tax refund",
    "inheritance",
];

/// Third-party tracking keywords for the tracking scoring stage.
pub const TRACKING_TERMS: &[&str] = &["google analytics", "facebook pixel", "tracking", "cookies"];

/// User-rights terms; three or more distinct matches earn a legal document
/// the transparency credit.
pub const USER_RIGHTS_TERMS: &[&str] = &[
    "right to delete",
    "right to access",
    "data portability",
    "opt-out",
    "withdraw consent",
    "data subject rights",
];

/// FERPA trigger keywords: student-record vocabulary.
pub const FERPA_KEYWORDS: &[&str] = &[
    "student records",
    "educational records",
    "student data",
    "grades",
    "disciplinary records",
    "personally identifiable information",
    "directory information",
    "transcript",
];

/// One category of the indicator extraction scan.
pub struct TermTable {
    pub kind: IndicatorKind,
    pub risk: RiskLevel,
    pub terms: &'static [&'static str],
}

/// Indicator tables in extraction order. Output indicator order follows this
/// table order, then term order within each table.
pub const INDICATOR_TABLES: &[TermTable] = &[
    TermTable {
        kind: IndicatorKind::PrivacyTerm,
        risk: RiskLevel::High,
        terms: PRIVACY_TERMS,
    },
    TermTable {
        kind: IndicatorKind::ConcerningLegalTerm,
        risk: RiskLevel::High,
        terms: LEGAL_RISK_TERMS,
    },
    TermTable {
        kind: IndicatorKind::DataSharing,
        risk: RiskLevel::High,
        terms: SHARING_TERMS,
    },
    TermTable {
        kind: IndicatorKind::BrandImpersonation,
        risk: RiskLevel::High,
        terms: BRAND_TERMS,
    },
    TermTable {
        kind: IndicatorKind::PaymentCollection,
        risk: RiskLevel::High,
        terms: PAYMENT_TERMS,
    },
];

/// Count how many distinct terms from `table` occur in `text_lower`.
/// Repeated occurrences of the same term count once.
pub fn count_distinct_matches(text_lower: &str, table: &[&str]) -> usize {
    table.iter().filter(|term| text_lower.contains(*term)).count()
}

/// Distinct matching terms from `table`, in table order.
pub fn matching_terms<'a>(text_lower: &str, table: &'a [&'a str]) -> Vec<&'a str> {
    table
        .iter()
        .filter(|term| text_lower.contains(*term))
        .copied()
        .collect()
}
