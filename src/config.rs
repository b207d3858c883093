use crate::models::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

pub const GATEWAY_KEY_ENV: &str = "LOVABLE_API_KEY";
pub const ANTHROPIC_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const QWEN_KEY_ENV: &str = "DASHSCOPE_API_KEY";

pub const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default)]
    pub providers: ProviderSettings,
}

/// Read-only upstream settings handed to the router once at start-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "gateway_defaults")]
    pub gateway: ProviderParams,
    #[serde(default = "anthropic_defaults")]
    pub anthropic: ProviderParams,
    #[serde(default = "qwen_defaults")]
    pub qwen: ProviderParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderParams {
    pub api_base: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Only sent by the Anthropic adapter as `anthropic-version`.
    #[serde(default)]
    pub version: Option<String>,
}

impl ProviderParams {
    fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
            api_key: None,
            version: None,
        }
    }

    /// Empty keys count as missing.
    pub fn key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn endpoint(&self, path: &str) -> String {
        if self.api_base.ends_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn gateway_defaults() -> ProviderParams {
    ProviderParams::new("https://ai.gateway.lovable.dev")
}

fn anthropic_defaults() -> ProviderParams {
    let mut params = ProviderParams::new("https://api.anthropic.com");
    params.version = Some(DEFAULT_ANTHROPIC_VERSION.to_string());
    params
}

fn qwen_defaults() -> ProviderParams {
    ProviderParams::new("https://dashscope-intl.aliyuncs.com/compatible-mode")
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            gateway: gateway_defaults(),
            anthropic: anthropic_defaults(),
            qwen: qwen_defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            providers: ProviderSettings::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Reads `path` when it exists, falls back to defaults otherwise, then
    /// fills missing keys from the environment.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let mut config = if Path::new(path).exists() {
            let config = Self::from_file(path)?;
            info!("Configuration loaded from: {}", path);
            config
        } else {
            warn!("Config file {} not found, using defaults", path);
            Config::default()
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Keys present in the file take precedence over the environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let slots = [
            (&mut self.providers.gateway, GATEWAY_KEY_ENV),
            (&mut self.providers.anthropic, ANTHROPIC_KEY_ENV),
            (&mut self.providers.qwen, QWEN_KEY_ENV),
        ];
        for (params, env_name) in slots {
            if params.key().is_none() {
                if let Some(value) = lookup(env_name).filter(|v| !v.trim().is_empty()) {
                    params.api_key = Some(value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.default_model, "google/gemini-2.5-flash");
        assert_eq!(config.providers.gateway.api_base, "https://ai.gateway.lovable.dev");
        assert_eq!(config.providers.anthropic.version.as_deref(), Some("2023-06-01"));
    }

    #[test]
    fn test_from_file_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
default_model: openai/gpt-5-mini
providers:
  anthropic:
    api_base: http://localhost:9000/
    api_key: sk-ant-file
"#
        )
        .unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.default_model, "openai/gpt-5-mini");
        assert_eq!(config.providers.anthropic.key(), Some("sk-ant-file"));
        assert_eq!(
            config.providers.anthropic.endpoint("v1/messages"),
            "http://localhost:9000/v1/messages"
        );
        assert!(config.providers.anthropic.version.is_none());
        assert_eq!(
            config.providers.qwen.endpoint("v1/chat/completions"),
            "https://dashscope-intl.aliyuncs.com/compatible-mode/v1/chat/completions"
        );
    }

    #[test]
    fn test_env_fills_only_missing_keys() {
        let mut config = Config::default();
        config.providers.anthropic.api_key = Some("from-file".to_string());
        config.providers.qwen.api_key = Some("   ".to_string());

        config.apply_env(|name| match name {
            GATEWAY_KEY_ENV => Some("gw-env".to_string()),
            ANTHROPIC_KEY_ENV => Some("ant-env".to_string()),
            QWEN_KEY_ENV => Some("qwen-env".to_string()),
            _ => None,
        });

        assert_eq!(config.providers.gateway.key(), Some("gw-env"));
        assert_eq!(config.providers.anthropic.key(), Some("from-file"));
        assert_eq!(config.providers.qwen.key(), Some("qwen-env"));
    }

    #[test]
    fn test_empty_env_value_is_missing() {
        let mut config = Config::default();
        config.apply_env(|_| Some(String::new()));
        assert!(config.providers.gateway.key().is_none());
    }
}
