use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIResponse {
    pub choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl OpenAIResponse {
    /// `choices[0].message.content`
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_choice_text() {
        let resp: OpenAIResponse = serde_json::from_value(json!({
            "id": "gen-1",
            "model": "google/gemini-2.5-flash",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Entropy counts microstates." }, "finish_reason": "stop" },
                { "index": 1, "message": { "role": "assistant", "content": "ignored" }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14 }
        }))
        .unwrap();
        assert_eq!(resp.into_text().as_deref(), Some("Entropy counts microstates."));
    }

    #[test]
    fn test_empty_choices_have_no_text() {
        let resp: OpenAIResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(resp.into_text().is_none());
    }
}
