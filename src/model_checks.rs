use crate::error::ChatError;
use crate::model_router::{ChatRouter, Provider};
use crate::models::ConversationTurn;
use crate::request_id::RequestId;
use futures::stream::{self, StreamExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Ok,
    Skipped,
    Failed(String),
}

/// Sends a one-turn `ping` through every provider family that has a key.
pub async fn perform_provider_checks(router: &ChatRouter) -> Vec<(Provider, CheckOutcome)> {
    println!("Checking providers ({} total):", Provider::ALL.len());

    stream::iter(Provider::ALL)
        .map(|provider| async move {
            if provider.params(router.settings()).key().is_none() {
                println!("[SKIP] {}: {} not set", provider.name(), provider.key_env());
                return (provider, CheckOutcome::Skipped);
            }

            let model = provider.probe_model();
            let turns = [ConversationTurn::user("ping")];
            match router.route(model, &turns, &RequestId::generate()).await {
                Ok(_) => {
                    println!("[OK] {} -> {}", provider.name(), model);
                    (provider, CheckOutcome::Ok)
                }
                Err(e) => {
                    let reason = match &e {
                        ChatError::UpstreamProtocolError { detail } => truncate(detail, 500),
                        other => other.to_string(),
                    };
                    println!("[FAIL] {} -> {}\n  {}", provider.name(), model, reason);
                    (provider, CheckOutcome::Failed(reason))
                }
            }
        })
        .buffer_unordered(Provider::ALL.len())
        .collect::<Vec<_>>()
        .await
}

fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}…", &s[..idx]),
    }
}
