use crate::models::{ContentPart, TurnContent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenAIContent {
    Text(String),
    Array(Vec<OpenAIContentItem>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIContentItem {
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<OpenAIImageUrl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIImageUrl {
    pub url: String,
}

impl From<&ContentPart> for OpenAIContentItem {
    fn from(part: &ContentPart) -> Self {
        match part {
            ContentPart::Text { text } => OpenAIContentItem {
                r#type: "text".to_string(),
                text: Some(text.clone()),
                image_url: None,
            },
            ContentPart::ImageUrl { .. } => OpenAIContentItem {
                r#type: "image_url".to_string(),
                text: None,
                image_url: part.image_url().map(|url| OpenAIImageUrl {
                    url: url.to_string(),
                }),
            },
        }
    }
}

impl From<&TurnContent> for OpenAIContent {
    fn from(content: &TurnContent) -> Self {
        match content {
            TurnContent::Text(text) => OpenAIContent::Text(text.clone()),
            TurnContent::Parts(parts) => {
                OpenAIContent::Array(parts.iter().map(OpenAIContentItem::from).collect())
            }
        }
    }
}
