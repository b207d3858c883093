use crate::config::ProviderParams;
use crate::error::ChatError;
use crate::model_router::ProviderAdapter;
use crate::request_id::{REQUEST_ID_HEADER, RequestId};
use reqwest::header::HeaderValue;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Issues exactly one POST per call. No retry, no timeout of its own.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http_client: Arc<reqwest::Client>,
}

impl LlmClient {
    pub fn new(http_client: Arc<reqwest::Client>) -> Self {
        Self { http_client }
    }

    pub async fn forward(
        &self,
        adapter: &dyn ProviderAdapter,
        params: &ProviderParams,
        api_key: &str,
        body: &Value,
        request_id: &RequestId,
    ) -> Result<Value, ChatError> {
        let target_url = params.endpoint(adapter.endpoint_path());

        let mut target_request = self
            .http_client
            .post(&target_url)
            .header("Content-Type", "application/json");

        if let Ok(val) = HeaderValue::from_str(&request_id.0) {
            target_request = target_request.header(REQUEST_ID_HEADER, val);
        }
        target_request = adapter.authorize(target_request, params, api_key);

        info!("Forwarding request to: {}", target_url);
        debug!("request body: {}", body);

        let response = target_request.json(body).send().await.map_err(|e| {
            warn!("Failed to send request to {}: {}", target_url, e);
            ChatError::protocol(format!("failed to send request: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Upstream {} responded with status {}: {}", target_url, status, error_text);
            return Err(ChatError::from_upstream_status(status, &error_text));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            warn!("Failed to parse response from {}: {}", target_url, e);
            ChatError::protocol(format!("failed to parse response: {}", e))
        })?;
        debug!("raw response: {}", response_json);
        Ok(response_json)
    }
}
