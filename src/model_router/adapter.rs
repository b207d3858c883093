use crate::config::{DEFAULT_ANTHROPIC_VERSION, ProviderParams};
use crate::converters::anthropic::{AnthropicRequest, AnthropicResponse};
use crate::converters::openai::{OpenAIRequest, OpenAIResponse};
use crate::error::ChatError;
use crate::models::ConversationTurn;
use reqwest::RequestBuilder;
use serde_json::Value;

const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";
const MESSAGES_PATH: &str = "v1/messages";

/// Wire translation for one upstream family.
pub trait ProviderAdapter: Send + Sync {
    fn endpoint_path(&self) -> &'static str;

    /// Model name written into the outbound body.
    fn wire_model(&self, model: &str) -> String {
        model.to_string()
    }

    fn build_body(
        &self,
        wire_model: String,
        persona: &str,
        turns: &[ConversationTurn],
    ) -> Result<Value, ChatError>;

    fn authorize(&self, request: RequestBuilder, params: &ProviderParams, api_key: &str) -> RequestBuilder;

    /// Pulls the assistant text out of a 2xx body.
    fn extract_message(&self, body: Value) -> Result<String, ChatError>;
}

fn openai_compatible_body(
    wire_model: String,
    persona: &str,
    turns: &[ConversationTurn],
) -> Result<Value, ChatError> {
    let request = OpenAIRequest::from_turns(wire_model, persona, turns);
    serde_json::to_value(request).map_err(|e| ChatError::protocol(format!("serialize request: {}", e)))
}

fn openai_compatible_message(body: Value) -> Result<String, ChatError> {
    let response: OpenAIResponse = serde_json::from_value(body)
        .map_err(|e| ChatError::protocol(format!("unexpected response shape: {}", e)))?;
    response
        .into_text()
        .ok_or_else(|| ChatError::protocol("response has no choices[0].message.content"))
}

fn bearer(request: RequestBuilder, api_key: &str) -> RequestBuilder {
    request.header("Authorization", format!("Bearer {}", api_key))
}

pub struct GatewayAdapter;

impl ProviderAdapter for GatewayAdapter {
    fn endpoint_path(&self) -> &'static str {
        CHAT_COMPLETIONS_PATH
    }

    fn build_body(&self, wire_model: String, persona: &str, turns: &[ConversationTurn]) -> Result<Value, ChatError> {
        openai_compatible_body(wire_model, persona, turns)
    }

    fn authorize(&self, request: RequestBuilder, _params: &ProviderParams, api_key: &str) -> RequestBuilder {
        bearer(request, api_key)
    }

    fn extract_message(&self, body: Value) -> Result<String, ChatError> {
        openai_compatible_message(body)
    }
}

pub struct QwenAdapter;

impl ProviderAdapter for QwenAdapter {
    fn endpoint_path(&self) -> &'static str {
        CHAT_COMPLETIONS_PATH
    }

    fn wire_model(&self, model: &str) -> String {
        match model {
            "qwen-3.5" => "qwen-plus".to_string(),
            other => other.to_string(),
        }
    }

    fn build_body(&self, wire_model: String, persona: &str, turns: &[ConversationTurn]) -> Result<Value, ChatError> {
        openai_compatible_body(wire_model, persona, turns)
    }

    fn authorize(&self, request: RequestBuilder, _params: &ProviderParams, api_key: &str) -> RequestBuilder {
        bearer(request, api_key)
    }

    fn extract_message(&self, body: Value) -> Result<String, ChatError> {
        openai_compatible_message(body)
    }
}

pub struct AnthropicAdapter;

impl ProviderAdapter for AnthropicAdapter {
    fn endpoint_path(&self) -> &'static str {
        MESSAGES_PATH
    }

    fn build_body(&self, wire_model: String, persona: &str, turns: &[ConversationTurn]) -> Result<Value, ChatError> {
        let request = AnthropicRequest::from_turns(wire_model, persona, turns);
        serde_json::to_value(request).map_err(|e| ChatError::protocol(format!("serialize request: {}", e)))
    }

    fn authorize(&self, request: RequestBuilder, params: &ProviderParams, api_key: &str) -> RequestBuilder {
        let version = params.version.as_deref().unwrap_or(DEFAULT_ANTHROPIC_VERSION);
        request
            .header("x-api-key", api_key)
            .header("anthropic-version", version)
    }

    fn extract_message(&self, body: Value) -> Result<String, ChatError> {
        let response: AnthropicResponse = serde_json::from_value(body)
            .map_err(|e| ChatError::protocol(format!("unexpected response shape: {}", e)))?;
        response
            .into_text()
            .ok_or_else(|| ChatError::protocol("response has no content[0].text"))
    }
}
