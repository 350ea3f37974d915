pub mod analysis;
pub mod classifier;
pub mod engine;
pub mod llm;

pub use analysis::{AnalysisModel, AnalysisService};
pub use classifier::LlmClassifierService;
pub use engine::RuleEngine;
pub use llm::LlmClient;
