//! Prompt construction for the external page classifier

use crate::model::PageSnapshot;

/// System prompt for page analysis.
pub const CLASSIFIER_SYSTEM_PROMPT: &str = "You are a privacy guardian for educational-technology platforms. You protect \
students by detecting privacy threats, brand impersonation, and risky data \
collection practices in captured web pages. Respond with properly formatted \
JSON only.";

/// Upper bound on page text included in the prompt.
const PROMPT_TEXT_CHARS: usize = 1000;

/// Build the analysis prompt from a snapshot.
pub fn build_analysis_prompt(snapshot: &PageSnapshot) -> String {
    format!(
        r#"Analyze this website data for privacy threats and brand impersonation.

WEBSITE DATA:
URL: {url}
Forms: {form_count} forms detected
Sensitive Fields: {sensitive_fields}
Text Length: {text_length} characters
Images: {image_count} images
Risk Indicators: {indicator_count} indicators

FORM DETAILS:
{forms}

TEXT CONTENT (first {text_chars} chars):
{text}

RISK INDICATORS:
{indicators}

IMAGE ANALYSIS:
{images}

ANALYSIS REQUIREMENTS:
1. Identify privacy threats (excessive data collection, vague terms)
2. Detect brand impersonation (fake logos, unauthorized claims)
3. Assess data collection practices
4. Calculate risk score (0-10)
5. Provide recommendation (Safe|Moderate|Caution|High Risk|Dangerous)
6. List specific red flags

RESPONSE FORMAT (JSON):
{{
    "summary": "Brief analysis summary",
    "risk_score": <0-10>,
    "recommendation": "Safe|Moderate|Caution|High Risk|Dangerous",
    "red_flags": ["flag1", "flag2"],
    "privacy_threats": ["threat1", "threat2"],
    "brand_impersonation": ["issue1", "issue2"],
    "data_collection_analysis": "Analysis of data collection practices"
}}"#,
        url = snapshot.url,
        form_count = snapshot.forms.len(),
        sensitive_fields = count_sensitive_fields(snapshot),
        text_length = snapshot.text.len(),
        image_count = snapshot.images.len(),
        indicator_count = snapshot.risk_indicators.len(),
        forms = format_forms(snapshot),
        text_chars = PROMPT_TEXT_CHARS,
        text = truncate_chars(&snapshot.text, PROMPT_TEXT_CHARS),
        indicators = format_indicators(snapshot),
        images = format_images(snapshot),
    )
}

fn count_sensitive_fields(snapshot: &PageSnapshot) -> usize {
    snapshot
        .forms
        .iter()
        .flat_map(|f| &f.fields)
        .filter(|f| f.sensitive)
        .count()
}

fn format_forms(snapshot: &PageSnapshot) -> String {
    if snapshot.forms.is_empty() {
        return "No forms detected".to_string();
    }

    snapshot
        .forms
        .iter()
        .enumerate()
        .map(|(i, form)| {
            let fields: Vec<String> = form
                .fields
                .iter()
                .map(|field| {
                    let mut info = format!("{}: {}", field.field_type, field.name);
                    if field.sensitive {
                        info.push_str(" (SENSITIVE)");
                    }
                    if field.required {
                        info.push_str(" (REQUIRED)");
                    }
                    info
                })
                .collect();
            format!("Form {}: {}", i + 1, fields.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_indicators(snapshot: &PageSnapshot) -> String {
    if snapshot.risk_indicators.is_empty() {
        return "No risk indicators detected".to_string();
    }

    snapshot
        .risk_indicators
        .iter()
        .map(|i| format!("- {:?}: {} ({:?} risk)", i.kind, i.term, i.risk))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_images(snapshot: &PageSnapshot) -> String {
    if snapshot.images.is_empty() {
        return "No images analyzed".to_string();
    }

    let brand_related: Vec<_> = snapshot.images.iter().filter(|i| i.brand_related).collect();

    let mut lines = vec![format!("Total Images: {}", snapshot.images.len())];
    if !brand_related.is_empty() {
        lines.push(format!("Brand-Related Images: {}", brand_related.len()));
        for img in brand_related.iter().take(3) {
            let alt = if img.alt.is_empty() {
                "No alt text"
            } else {
                img.alt.as_str()
            };
            let name = if img.filename.is_empty() {
                "Unknown"
            } else {
                img.filename.as_str()
            };
            lines.push(format!("  - {alt} ({name})"));
        }
    }

    lines.join("\n")
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Form};

    #[test]
    fn prompt_includes_form_summary() {
        let snapshot = PageSnapshot {
            url: "https://example.com".to_string(),
            forms: vec![Form {
                fields: vec![Field {
                    name: "email".to_string(),
                    field_type: "email".to_string(),
                    placeholder: String::new(),
                    sensitive: true,
                    required: true,
                }],
            }],
            text: "hello".to_string(),
            images: vec![],
            risk_indicators: vec![],
            is_legal_document: false,
            document_type: None,
            website_type: None,
        };

        let prompt = build_analysis_prompt(&snapshot);
        assert!(prompt.contains("Form 1: email: email (SENSITIVE) (REQUIRED)"));
        assert!(prompt.contains("Sensitive Fields: 1"));
        assert!(prompt.contains("No risk indicators detected"));
    }

    #[test]
    fn prompt_text_is_bounded() {
        let snapshot = PageSnapshot {
            url: "https://example.com".to_string(),
            forms: vec![],
            text: "x".repeat(5000),
            images: vec![],
            risk_indicators: vec![],
            is_legal_document: false,
            document_type: None,
            website_type: None,
        };

        let prompt = build_analysis_prompt(&snapshot);
        // Full text must not leak into the prompt.
        assert!(!prompt.contains(&"x".repeat(1001)));
    }
}
