use crate::config::{
    ANTHROPIC_KEY_ENV, GATEWAY_KEY_ENV, ProviderParams, ProviderSettings, QWEN_KEY_ENV,
};
use crate::error::ChatError;
use crate::model_router::adapter::{AnthropicAdapter, GatewayAdapter, ProviderAdapter, QwenAdapter};

/// Upstream family a model identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// OpenAI-compatible gateway serving `google/*` and `openai/*`.
    Gateway,
    /// Native Anthropic Messages API serving `claude-*`.
    Anthropic,
    /// OpenAI-compatible Qwen endpoint serving `qwen-*`.
    Qwen,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Gateway, Provider::Anthropic, Provider::Qwen];

    pub fn classify(model: &str) -> Result<Self, ChatError> {
        if model.starts_with("google/") || model.starts_with("openai/") {
            Ok(Provider::Gateway)
        } else if model.starts_with("claude-") {
            Ok(Provider::Anthropic)
        } else if model.starts_with("qwen-") {
            Ok(Provider::Qwen)
        } else {
            Err(ChatError::UnsupportedModel(model.to_string()))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gateway => "gateway",
            Provider::Anthropic => "anthropic",
            Provider::Qwen => "qwen",
        }
    }

    /// Environment variable reported when the key is missing.
    pub fn key_env(&self) -> &'static str {
        match self {
            Provider::Gateway => GATEWAY_KEY_ENV,
            Provider::Anthropic => ANTHROPIC_KEY_ENV,
            Provider::Qwen => QWEN_KEY_ENV,
        }
    }

    /// Model used by the start-up provider check.
    pub fn probe_model(&self) -> &'static str {
        match self {
            Provider::Gateway => "google/gemini-2.5-flash-lite",
            Provider::Anthropic => "claude-3-5-haiku-latest",
            Provider::Qwen => "qwen-turbo",
        }
    }

    pub fn params<'a>(&self, settings: &'a ProviderSettings) -> &'a ProviderParams {
        match self {
            Provider::Gateway => &settings.gateway,
            Provider::Anthropic => &settings.anthropic,
            Provider::Qwen => &settings.qwen,
        }
    }

    pub fn adapter(&self) -> &'static dyn ProviderAdapter {
        match self {
            Provider::Gateway => &GatewayAdapter,
            Provider::Anthropic => &AnthropicAdapter,
            Provider::Qwen => &QwenAdapter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(Provider::classify("google/gemini-2.5-flash").unwrap(), Provider::Gateway);
        assert_eq!(Provider::classify("google/gemini-2.5-pro").unwrap(), Provider::Gateway);
        assert_eq!(Provider::classify("openai/gpt-5").unwrap(), Provider::Gateway);
        assert_eq!(Provider::classify("claude-sonnet-4-20250514").unwrap(), Provider::Anthropic);
        assert_eq!(Provider::classify("qwen-3.5").unwrap(), Provider::Qwen);
        assert_eq!(Provider::classify("qwen-max").unwrap(), Provider::Qwen);
    }

    #[test]
    fn test_classify_rejects_unknown_families() {
        for model in ["llama-3", "", "google", "claude", "Qwen-max", "anthropic/claude-3"] {
            match Provider::classify(model) {
                Err(ChatError::UnsupportedModel(m)) => assert_eq!(m, model),
                other => panic!("expected UnsupportedModel for {:?}, got {:?}", model, other),
            }
        }
    }

    #[test]
    fn test_key_env_names() {
        assert_eq!(Provider::Gateway.key_env(), "LOVABLE_API_KEY");
        assert_eq!(Provider::Anthropic.key_env(), "ANTHROPIC_API_KEY");
        assert_eq!(Provider::Qwen.key_env(), "DASHSCOPE_API_KEY");
    }
}
