use crate::converters::anthropic::{AnthropicContent, AnthropicMessage};
use crate::models::{ConversationTurn, Role};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TOKENS: u32 = 4096;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// System turns never appear in `messages`. The first caller system turn
    /// wins the top-level `system` field, the persona is the fallback.
    pub fn from_turns(model: String, persona: &str, turns: &[ConversationTurn]) -> Self {
        let mut system: Option<String> = None;
        let mut messages = Vec::new();

        for turn in turns {
            match turn.role {
                Role::System => {
                    if system.is_none() {
                        system = Some(turn.content.text());
                    }
                }
                Role::User | Role::Assistant => messages.push(AnthropicMessage {
                    role: turn.role.as_str().to_string(),
                    content: AnthropicContent::from(&turn.content),
                }),
            }
        }

        AnthropicRequest {
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            system: system.unwrap_or_else(|| persona.to_string()),
            messages,
        }
    }
}
