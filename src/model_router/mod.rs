//! Prefix-based dispatch of a conversation to one of the upstream families.
//!
//! The router owns nothing mutable: settings are fixed at construction and
//! every call builds its own outbound body, so concurrent calls never share
//! state.

use crate::config::ProviderSettings;
use crate::error::ChatError;
use crate::llm_client::LlmClient;
use crate::models::{ChatResult, ConversationTurn};
use crate::persona::TUTOR_PERSONA;
use crate::request_id::RequestId;
use std::sync::Arc;
use tracing::{debug, info, warn};

mod adapter;
mod provider;

pub use adapter::ProviderAdapter;
pub use provider::Provider;

#[derive(Debug, Clone)]
pub struct ChatRouter {
    settings: Arc<ProviderSettings>,
    client: LlmClient,
}

impl ChatRouter {
    pub fn new(settings: Arc<ProviderSettings>, client: LlmClient) -> Self {
        Self { settings, client }
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    pub async fn route(
        &self,
        model: &str,
        turns: &[ConversationTurn],
        request_id: &RequestId,
    ) -> Result<ChatResult, ChatError> {
        let provider = Provider::classify(model).inspect_err(|_| {
            info!("Model '{}' matches no provider family", model);
        })?;
        let params = provider.params(&self.settings);
        let api_key = params
            .key()
            .ok_or(ChatError::ConfigurationError(provider.key_env()))
            .inspect_err(|e| warn!("{} provider unavailable: {}", provider.name(), e))?;

        let adapter = provider.adapter();
        let wire_model = adapter.wire_model(model);
        debug!(
            "Routing model '{}' to {} as '{}' with {} turns",
            model,
            provider.name(),
            wire_model,
            turns.len()
        );
        let body = adapter.build_body(wire_model, TUTOR_PERSONA, turns)?;

        let response = self
            .client
            .forward(adapter, params, api_key, &body, request_id)
            .await?;
        let message = adapter.extract_message(response).inspect_err(|e| {
            if let ChatError::UpstreamProtocolError { detail } = e {
                warn!("Unreadable {} response: {}", provider.name(), detail);
            }
        })?;

        Ok(ChatResult {
            message,
            model: model.to_string(),
        })
    }
}
