//! Analysis orchestration
//!
//! Owns the classifier-first, rules-always-fallback flow: truncate the
//! snapshot text once, try the LLM classifier inside a timeout when one is
//! configured, and fall back to the rule engine on any failure. Callers
//! always get a complete result.

use std::time::Duration;

use crate::model::{AnalysisConfig, AnalysisResult, DeceptionFinding, PageSnapshot};
use crate::service::classifier::LlmClassifierService;
use crate::service::engine::{RuleEngine, compliance};

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisModel {
    Llm,
    RuleBased,
}

impl AnalysisModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisModel::Llm => "llm",
            AnalysisModel::RuleBased => "rule-based",
        }
    }
}

pub struct AnalysisService {
    engine: RuleEngine,
    classifier: Option<LlmClassifierService>,
    config: AnalysisConfig,
}

impl AnalysisService {
    pub fn new(classifier: Option<LlmClassifierService>, config: AnalysisConfig) -> Self {
        Self {
            engine: RuleEngine::new(),
            classifier,
            config,
        }
    }

    pub fn classifier_available(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a snapshot, reporting which path produced the result.
    pub async fn analyze(&self, mut snapshot: PageSnapshot) -> (AnalysisResult, AnalysisModel) {
        truncate_text(&mut snapshot.text, self.config.max_text_length);

        if let Some(classifier) = &self.classifier {
            let timeout = Duration::from_secs(self.config.classifier_timeout_secs);
            match tokio::time::timeout(timeout, classifier.classify(&snapshot)).await {
                Ok(Ok(result)) => return (result, AnalysisModel::Llm),
                Ok(Err(e)) => {
                    tracing::warn!(
                        url = %snapshot.url,
                        error = %e,
                        "LLM classification failed, falling back to rule-based analysis"
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        url = %snapshot.url,
                        timeout_secs = self.config.classifier_timeout_secs,
                        "LLM classification timed out, falling back to rule-based analysis"
                    );
                }
            }
        }

        let result = self
            .engine
            .analyze(&snapshot, self.config.scoring_profile);
        (result, AnalysisModel::RuleBased)
    }

    /// Run only the deception patterns over free text. The text boundary
    /// applies here exactly as on the full analysis path.
    pub fn detect_deception(&self, text: &str) -> Vec<DeceptionFinding> {
        self.engine
            .detect_deception(clip(text, self.config.max_text_length))
    }

    /// Run only the FERPA and GDPR checks over free text, bounded the same
    /// way as the full analysis path.
    pub fn check_compliance(&self, text: &str) -> (Vec<String>, Vec<String>) {
        let text_lower = clip(text, self.config.max_text_length).to_lowercase();
        (
            compliance::check_ferpa(&text_lower),
            compliance::check_gdpr(&text_lower),
        )
    }
}

/// Truncate in place at a char boundary, at most once.
fn truncate_text(text: &mut String, max_len: usize) {
    let len = clip(text, max_len).len();
    text.truncate(len);
}

/// The longest prefix of `text` within `max_len` bytes that ends on a char
/// boundary.
fn clip(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let boundary = (0..=max_len)
        .rev()
        .find(|i| text.is_char_boundary(*i))
        .unwrap_or(0);
    &text[..boundary]
}
