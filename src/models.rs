use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message of the conversation as sent by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: TurnContent,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: TurnContent::Text(content.into()),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    #[cfg(test)]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TurnContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl TurnContent {
    /// Concatenated text of the content, image parts are skipped.
    pub fn text(&self) -> String {
        match self {
            TurnContent::Text(text) => text.clone(),
            TurnContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.as_str()),
                    ContentPart::ImageUrl { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    /// Accepts both the flat `{url}` form and the OpenAI `{image_url: {url}}` form.
    #[serde(rename = "image_url")]
    ImageUrl {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<ImageUrl>,
    },
}

impl ContentPart {
    #[cfg(test)]
    pub fn image(url: impl Into<String>) -> Self {
        ContentPart::ImageUrl {
            url: Some(url.into()),
            image_url: None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            ContentPart::ImageUrl { url, image_url } => url
                .as_deref()
                .or_else(|| image_url.as_ref().map(|i| i.url.as_str())),
            ContentPart::Text { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ConversationTurn>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    pub message: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_chat_request_without_model() {
        let req: ChatRequest = serde_json::from_value(json!({
            "messages": [
                { "role": "user", "content": "[Subject: Physics] what is entropy?" }
            ]
        }))
        .unwrap();
        assert!(req.model.is_none());
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, Role::User);
        assert_eq!(
            req.messages[0].content,
            TurnContent::Text("[Subject: Physics] what is entropy?".to_string())
        );
    }

    #[test]
    fn test_parse_structured_content_both_image_forms() {
        let turn: ConversationTurn = serde_json::from_value(json!({
            "role": "user",
            "content": [
                { "type": "text", "text": "what is this circuit?" },
                { "type": "image_url", "url": "https://example.com/a.png" },
                { "type": "image_url", "image_url": { "url": "https://example.com/b.png" } }
            ]
        }))
        .unwrap();

        let TurnContent::Parts(parts) = &turn.content else {
            panic!("expected structured content");
        };
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].image_url(), None);
        assert_eq!(parts[1].image_url(), Some("https://example.com/a.png"));
        assert_eq!(parts[2].image_url(), Some("https://example.com/b.png"));
        assert_eq!(turn.content.text(), "what is this circuit?");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_value::<ConversationTurn>(json!({
            "role": "tool",
            "content": "x"
        }));
        assert!(result.is_err());
    }
}
