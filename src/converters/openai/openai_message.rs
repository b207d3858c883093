use crate::converters::openai::OpenAIContent;
use crate::models::ConversationTurn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: OpenAIContent,
}

impl From<&ConversationTurn> for OpenAIMessage {
    fn from(turn: &ConversationTurn) -> Self {
        OpenAIMessage {
            role: turn.role.as_str().to_string(),
            content: OpenAIContent::from(&turn.content),
        }
    }
}
