use crate::models::{ContentPart, TurnContent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnthropicContent {
    Text(String),
    Array(Vec<AnthropicContentObject>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnthropicContentObject {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image")]
    Image { source: AnthropicImageSource },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicImageSource {
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AnthropicImageSource {
    /// `data:<media>;base64,<payload>` becomes a base64 source, anything else a url source.
    pub fn from_url(url: &str) -> Option<Self> {
        if let Some(rest) = url.strip_prefix("data:") {
            let (meta, payload) = rest.split_once(',')?;
            let media_type = meta.strip_suffix(";base64")?;
            return Some(AnthropicImageSource {
                r#type: "base64".to_string(),
                media_type: Some(media_type.to_string()),
                data: Some(payload.to_string()),
                url: None,
            });
        }
        Some(AnthropicImageSource {
            r#type: "url".to_string(),
            media_type: None,
            data: None,
            url: Some(url.to_string()),
        })
    }
}

impl From<&TurnContent> for AnthropicContent {
    fn from(content: &TurnContent) -> Self {
        match content {
            TurnContent::Text(text) => AnthropicContent::Text(text.clone()),
            TurnContent::Parts(parts) => AnthropicContent::Array(
                parts
                    .iter()
                    .filter_map(|part| match part {
                        ContentPart::Text { text } => {
                            Some(AnthropicContentObject::Text { text: text.clone() })
                        }
                        ContentPart::ImageUrl { .. } => part
                            .image_url()
                            .and_then(AnthropicImageSource::from_url)
                            .map(|source| AnthropicContentObject::Image { source }),
                    })
                    .collect(),
            ),
        }
    }
}
