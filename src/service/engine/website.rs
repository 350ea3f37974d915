//! Website and legal-document classification
//!
//! Classification is precedence-ordered and deterministic: URL substring
//! checks run first, content keywords second, first match wins. The
//! precedence tables below are the contract; reordering entries changes
//! output.

/// One website category: label plus its URL and content match lists.
struct CategoryRule {
    label: &'static str,
    url_terms: &'static [&'static str],
    content_terms: &'static [&'static str],
}

/// Website categories in priority order. Social outranks educational,
/// educational outranks financial, and so on down to technology; anything
/// unmatched is `general`.
const WEBSITE_RULES: &[CategoryRule] = &[
    CategoryRule {
        label: "social_media",
        url_terms: &[
            "instagram", "facebook", "twitter", "tiktok", "snapchat", "linkedin", "youtube",
        ],
        content_terms: &["post", "share", "follow", "like", "comment", "feed"],
    },
    CategoryRule {
        label: "educational",
        url_terms: &[
            "coursera",
            "edx",
            "khanacademy",
            "udemy",
            "mit.edu",
            "stanford.edu",
            "harvard.edu",
            "course",
            "learn",
            "education",
            "university",
        ],
        content_terms: &[
            "course", "lesson", "learn", "education", "university", "college", "student",
            "academic",
        ],
    },
    CategoryRule {
        label: "financial",
        url_terms: &[
            "bank", "chase", "wellsfargo", "paypal", "stripe", "financial", "credit", "loan",
            "mortgage",
        ],
        content_terms: &["bank", "account", "payment", "credit", "loan", "mortgage"],
    },
    CategoryRule {
        label: "ecommerce",
        url_terms: &[
            "amazon", "ebay", "shop", "store", "buy", "purchase", "cart", "walmart", "target",
        ],
        content_terms: &["shop", "buy", "purchase", "price", "sale", "discount", "checkout"],
    },
    CategoryRule {
        label: "government",
        url_terms: &[".gov", "government", "irs", "ssa"],
        content_terms: &["federal agency", "public services", "citizen"],
    },
    CategoryRule {
        label: "healthcare",
        url_terms: &["health", "medical", "doctor", "hospital", "clinic", "pharmacy"],
        content_terms: &["patient", "diagnosis", "treatment", "medical"],
    },
    CategoryRule {
        label: "legal",
        url_terms: &["law", "legal", "attorney"],
        content_terms: &["attorney", "law firm", "legal advice"],
    },
    CategoryRule {
        label: "news",
        url_terms: &["news", "times", "post", "herald"],
        content_terms: &["breaking news", "headline", "journalist", "editorial"],
    },
    CategoryRule {
        label: "technology",
        url_terms: &["tech", "software", "cloud", "dev"],
        content_terms: &["software", "developer", "api", "open source"],
    },
];

/// Legal-document types in priority order.
struct DocumentRule {
    label: &'static str,
    url_terms: &'static [&'static str],
    content_terms: &'static [&'static str],
}

const DOCUMENT_RULES: &[DocumentRule] = &[
    DocumentRule {
        label: "privacy_policy",
        url_terms: &["privacy"],
        content_terms: &["privacy policy", "data protection", "personal information"],
    },
    DocumentRule {
        label: "terms_of_service",
        url_terms: &["terms", "tos"],
        content_terms: &["terms of service", "terms and conditions", "user agreement"],
    },
    DocumentRule {
        label: "cookie_policy",
        url_terms: &["cookie"],
        content_terms: &["cookie policy", "cookie notice"],
    },
    DocumentRule {
        label: "data_processing_agreement",
        url_terms: &["dpa"],
        content_terms: &["data processing agreement", "gdpr"],
    },
];

/// Generic legal vocabulary: enough to call something a legal document, not
/// enough to say which kind.
const GENERIC_LEGAL_TERMS: &[&str] = &["legal", "law", "agreement", "contract", "policy"];

/// Classify a website by URL first, content second, precedence order fixed.
pub fn classify_website(url: &str, text: &str) -> String {
    let url_lower = url.to_lowercase();
    let text_lower = text.to_lowercase();

    for rule in WEBSITE_RULES {
        if rule.url_terms.iter().any(|t| url_lower.contains(t)) {
            return rule.label.to_string();
        }
    }

    for rule in WEBSITE_RULES {
        if rule.content_terms.iter().any(|t| text_lower.contains(t)) {
            return rule.label.to_string();
        }
    }

    "general".to_string()
}

/// Classify a legal document by URL first, content second.
pub fn classify_document(url: &str, text: &str) -> String {
    let url_lower = url.to_lowercase();
    let text_lower = text.to_lowercase();

    for rule in DOCUMENT_RULES {
        if rule.url_terms.iter().any(|t| url_lower.contains(t)) {
            return rule.label.to_string();
        }
    }

    for rule in DOCUMENT_RULES {
        if rule.content_terms.iter().any(|t| text_lower.contains(t)) {
            return rule.label.to_string();
        }
    }

    if GENERIC_LEGAL_TERMS.iter().any(|t| text_lower.contains(t)) {
        return "legal_document".to_string();
    }

    "unknown_document".to_string()
}
