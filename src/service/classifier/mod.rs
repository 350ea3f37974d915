//! LLM-backed page classifier
//!
//! Produces a full analysis from a page snapshot via an external model.
//! Output is never trusted as-is; every response goes through
//! [`normalize::normalize_response`] before reaching callers.

use rig::providers::openai;
use thiserror::Error;

use crate::model::{AnalysisResult, PageSnapshot};
use crate::service::classifier::prompts::{CLASSIFIER_SYSTEM_PROMPT, build_analysis_prompt};
use crate::service::llm::LlmClient;

pub mod normalize;
pub mod prompts;

/// Environment variable for classifier model (defaults to GPT-4O-mini if not set)
const ENV_CLASSIFIER_MODEL: &str = "CLASSIFIER_MODEL";

/// Default model for page classification
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// Error type for LLM page classification
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("LLM classification failed: {0}")]
    ClassificationFailed(String),
}

/// Service for classifying page snapshots with an external model
pub struct LlmClassifierService {
    llm_client: LlmClient,
    model: String,
}

impl LlmClassifierService {
    /// Creates a new classifier service
    ///
    /// Uses a shared LLM client passed from startup.
    /// Optionally uses CLASSIFIER_MODEL env var (defaults to gpt-4o-mini)
    pub fn new(llm_client: LlmClient) -> Self {
        let model =
            std::env::var(ENV_CLASSIFIER_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            "LLM classifier service initialized"
        );

        Self { llm_client, model }
    }

    /// Classify a page snapshot with one completion call.
    ///
    /// Single attempt, no retries; the analysis service owns the timeout
    /// and the rule-based fallback.
    pub async fn classify(&self, snapshot: &PageSnapshot) -> Result<AnalysisResult, ClassifierError> {
        let start_time = std::time::Instant::now();

        tracing::debug!(
            url = %snapshot.url,
            model = %self.model,
            form_count = snapshot.forms.len(),
            "Initiating OpenAI API call for page classification"
        );

        let prompt = build_analysis_prompt(snapshot);
        let prompt_length = prompt.len();

        let response = match self
            .llm_client
            .complete(&self.model, CLASSIFIER_SYSTEM_PROMPT, &prompt)
            .await
        {
            Ok(text) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    url = %snapshot.url,
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    "OpenAI API call for page classification completed successfully"
                );
                text
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    url = %snapshot.url,
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "OpenAI API call for page classification failed"
                );
                return Err(ClassifierError::ClassificationFailed(e));
            }
        };

        let result = normalize::normalize_response(&response, snapshot);

        tracing::debug!(
            url = %snapshot.url,
            risk_score = result.risk_score,
            recommendation = %result.recommendation,
            "Normalized classifier response"
        );

        Ok(result)
    }
}
