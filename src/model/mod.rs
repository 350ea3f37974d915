pub mod analysis;
pub mod config;
pub mod extracted;
pub mod snapshot;

pub use analysis::{AnalysisResult, DeceptionFinding, Recommendation};
pub use config::{AnalysisConfig, Config, ScoringProfile};
pub use extracted::ExtractedAnalysis;
pub use snapshot::{Field, Form, Image, IndicatorKind, PageSnapshot, RiskIndicator, RiskLevel};
