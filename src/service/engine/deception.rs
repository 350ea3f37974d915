//! Deceptive-language detection
//!
//! Regex patterns targeting the phrasing tricks common in EdTech policies:
//! non-committal modal verbs around data use, unboundedly vague scope
//! phrases, quietly-worded tracking, and consent language that removes the
//! user from the decision.

use regex::Regex;

use crate::model::{DeceptionFinding, IndicatorKind, RiskIndicator, RiskLevel};

/// Upper bound on example matches carried per finding.
const MAX_EXAMPLES: usize = 3;

struct DeceptionPattern {
    /// Stable identifier reported in findings.
    id: &'static str,
    regex: Regex,
}

/// Compiled deception patterns, built once at startup.
pub struct DeceptionDetector {
    patterns: Vec<DeceptionPattern>,
}

impl Default for DeceptionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DeceptionDetector {
    pub fn new() -> Self {
        // Pattern order is the reporting order; ids are part of the output
        // contract.
        let table: &[(&str, &str)] = &[
            (
                "ambiguous_commitment",
                r"(?i)\b(?:may|might|could)\s+(?:share|collect|use|disclose|sell|transfer)\b",
            ),
            (
                "vague_scope",
                r"(?i)including but not limited to|among others|from time to time|at (?:our|its) (?:sole )?discretion",
            ),
            (
                "hidden_tracking",
                r"(?i)third[-\s]party (?:cookies|trackers|tracking)|automatically (?:collect|collected|receive)|passively collect",
            ),
            (
                "consent_gap",
                r"(?i)without (?:your )?(?:prior |explicit |express )?consent|deemed to (?:have )?consent(?:ed)?|continued use (?:of the service )?constitutes",
            ),
        ];

        let patterns = table
            .iter()
            .map(|&(id, pattern)| DeceptionPattern {
                id,
                // Patterns are static and covered by tests; a failure here is
                // a programming error, not an input error.
                regex: Regex::new(pattern).unwrap(),
            })
            .collect();

        Self { patterns }
    }

    /// Scan text for deception patterns. One finding per matched pattern id,
    /// carrying the occurrence count and at most [`MAX_EXAMPLES`] examples.
    pub fn detect(&self, text: &str) -> Vec<DeceptionFinding> {
        let mut findings = Vec::new();

        for pattern in &self.patterns {
            let mut matches = 0;
            let mut examples = Vec::new();

            for m in pattern.regex.find_iter(text) {
                matches += 1;
                if examples.len() < MAX_EXAMPLES {
                    examples.push(m.as_str().to_string());
                }
            }

            if matches > 0 {
                findings.push(DeceptionFinding {
                    kind: IndicatorKind::DeceptiveLanguage,
                    pattern: pattern.id.to_string(),
                    matches,
                    examples,
                });
            }
        }

        findings
    }

    /// Findings expressed as risk indicators, one per matched pattern id.
    pub fn as_indicators(findings: &[DeceptionFinding]) -> Vec<RiskIndicator> {
        findings
            .iter()
            .map(|f| RiskIndicator {
                kind: IndicatorKind::DeceptiveLanguage,
                term: f.pattern.clone(),
                risk: RiskLevel::Medium,
            })
            .collect()
    }
}
