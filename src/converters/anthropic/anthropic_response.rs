use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicResponse {
    pub content: Vec<AnthropicResponseBlock>,
}

/// Non-text blocks deserialize with no `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicResponseBlock {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnthropicResponse {
    /// `content[0].text`
    pub fn into_text(self) -> Option<String> {
        self.content.into_iter().next()?.text
    }
}
