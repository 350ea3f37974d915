//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use actix_web::web;

use crate::model::Config;
use crate::service::{AnalysisService, LlmClassifierService, LlmClient};

/// Application state containing all services and shared resources
pub struct AppState {
    /// Analysis orchestration service, shared across handlers
    pub analysis_service: web::Data<AnalysisService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// The LLM classifier is optional: it is enabled only when OPENAI_API_KEY
    /// is set and the client can be constructed. The rule engine always runs.
    pub fn new(config: &Config) -> Self {
        let classifier = match std::env::var("OPENAI_API_KEY") {
            Ok(api_key) => {
                tracing::info!("LLM classifier enabled");
                Some(LlmClassifierService::new(LlmClient::new(&api_key)))
            }
            Err(_) => {
                tracing::info!("OPENAI_API_KEY not set, running rule-based only");
                None
            }
        };

        let analysis_service =
            web::Data::new(AnalysisService::new(classifier, config.analysis.clone()));

        Self { analysis_service }
    }
}
