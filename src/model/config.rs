use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use utoipa::ToSchema;

const ENV_CONFIG_PATH: &str = "SHADOWLENS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const DEFAULT_MAX_TEXT_LENGTH: usize = 3000;
const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 20;

/// Which clamp range and recommendation buckets the scorer uses.
///
/// Two schemes exist in observed deployments; the profile makes the choice
/// explicit per deployment instead of resolving it silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    /// Clamp to [1, 10], three buckets (Safe / Caution / Dangerous).
    Legacy,
    /// Clamp to [0, 10], five buckets. The recommended default.
    #[default]
    Enhanced,
}

/// Analysis tuning shared by the API layer and the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub scoring_profile: ScoringProfile,
    /// Text longer than this is truncated once, at the boundary.
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
    /// Upper bound on the single external-classifier attempt.
    #[serde(default = "default_classifier_timeout_secs")]
    pub classifier_timeout_secs: u64,
}

fn default_max_text_length() -> usize {
    DEFAULT_MAX_TEXT_LENGTH
}

fn default_classifier_timeout_secs() -> u64 {
    DEFAULT_CLASSIFIER_TIMEOUT_SECS
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scoring_profile: ScoringProfile::default(),
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            classifier_timeout_secs: DEFAULT_CLASSIFIER_TIMEOUT_SECS,
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let analysis = Self::load_config_file(&config_path)
            .map(|cf| cf.analysis)
            .unwrap_or_default();

        Self {
            analysis,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.scoring_profile, ScoringProfile::Enhanced);
        assert_eq!(config.max_text_length, 3000);
        assert_eq!(config.classifier_timeout_secs, 20);
    }

    #[test]
    fn scoring_profile_parses_lowercase() {
        let config: AnalysisConfig = serde_yaml::from_str("scoring_profile: legacy").unwrap();
        assert_eq!(config.scoring_profile, ScoringProfile::Legacy);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let file: ConfigFile = serde_yaml::from_str("analysis:\n  max_text_length: 5000").unwrap();
        assert_eq!(file.analysis.max_text_length, 5000);
        assert_eq!(file.analysis.scoring_profile, ScoringProfile::Enhanced);
    }
}
