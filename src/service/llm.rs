//! Shared LLM client and interaction utilities
//!
//! Thin wrapper over the OpenAI provider so the classifier service does not
//! carry provider types through its API.

use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Self {
        Self {
            client: openai::Client::new(api_key),
        }
    }

    /// Run a single completion against `model` with the given system
    /// preamble. One attempt, no retries; the caller owns the timeout.
    pub async fn complete(
        &self,
        model: &str,
        preamble: &str,
        prompt: &str,
    ) -> Result<String, String> {
        let agent = self.client.agent(model).preamble(preamble).build();

        agent.prompt(prompt).await.map_err(|e| e.to_string())
    }
}
