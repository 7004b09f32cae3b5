//! Voiceplan configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main Voiceplan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model gateway configuration
    pub llm: LlmConfig,

    /// Plan storage configuration
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .voiceplan.yml
        let local_config = PathBuf::from(".voiceplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/voiceplan/voiceplan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("voiceplan").join("voiceplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Model gateway configuration
///
/// The credential itself is never stored here: only where to find it. It is
/// resolved lazily at first gateway use, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key (fallback source)
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Secrets file checked before the environment variable
    ///
    /// Defaults to `~/.config/voiceplan/secrets.yml` when unset.
    #[serde(rename = "secrets-file")]
    pub secrets_file: Option<PathBuf>,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-output-tokens")]
    pub max_output_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Effective secrets file path, explicit or platform default
    pub fn secrets_path(&self) -> Option<PathBuf> {
        self.secrets_file
            .clone()
            .or_else(|| dirs::config_dir().map(|d| d.join("voiceplan").join("secrets.yml")))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            secrets_file: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_output_tokens: 2048,
            timeout_ms: 120_000,
        }
    }
}

/// Plan storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file for accounts and saved plans
    #[serde(rename = "db-path")]
    pub db_path: PathBuf,

    /// How many saved plans a listing shows by default
    #[serde(rename = "list-limit")]
    pub list_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        // Use XDG data directory (~/.local/share/voiceplan on Linux)
        let db_path = dirs::data_dir()
            .map(|d| d.join("voiceplan"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("planner.db");

        Self { db_path, list_limit: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.storage.list_limit, 5);
    }

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();

        assert!(config.model.contains("gemini"));
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert!(config.secrets_file.is_none());
        assert!(config.secrets_path().is_some() || dirs::config_dir().is_none());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: gemini
  model: gemini-2.5-pro
  api-key-env: MY_GEMINI_KEY
  secrets-file: /etc/voiceplan/secrets.yml
  base-url: https://api.example.com
  max-output-tokens: 4096
  timeout-ms: 60000

storage:
  db-path: /tmp/voiceplan/planner.db
  list-limit: 10
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "gemini-2.5-pro");
        assert_eq!(config.llm.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.llm.max_output_tokens, 4096);
        assert_eq!(config.llm.secrets_path(), Some(PathBuf::from("/etc/voiceplan/secrets.yml")));
        assert_eq!(config.storage.db_path, PathBuf::from("/tmp/voiceplan/planner.db"));
        assert_eq!(config.storage.list_limit, 10);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: gemini-2.5-flash
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.llm.model, "gemini-2.5-flash");

        // Defaults for unspecified
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.storage.list_limit, 5);
    }
}
