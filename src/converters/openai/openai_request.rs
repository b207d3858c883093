use crate::converters::openai::OpenAIMessage;
use crate::models::ConversationTurn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
}

impl OpenAIRequest {
    /// Persona first, then every caller turn in order. Caller system turns are kept.
    pub fn from_turns(model: String, persona: &str, turns: &[ConversationTurn]) -> Self {
        let messages = std::iter::once(&ConversationTurn::system(persona))
            .chain(turns.iter())
            .map(OpenAIMessage::from)
            .collect();
        OpenAIRequest { model, messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentPart, Role, TurnContent};
    use serde_json::json;

    #[test]
    fn test_persona_goes_first() {
        let turns = vec![
            ConversationTurn::user("hi"),
            ConversationTurn::assistant("hello"),
            ConversationTurn::user("explain torque"),
        ];
        let req = OpenAIRequest::from_turns("google/gemini-2.5-flash".to_string(), "PERSONA", &turns);
        let v = serde_json::to_value(&req).unwrap();

        assert_eq!(v["model"], "google/gemini-2.5-flash");
        assert_eq!(v["messages"].as_array().unwrap().len(), 4);
        assert_eq!(v["messages"][0], json!({ "role": "system", "content": "PERSONA" }));
        assert_eq!(v["messages"][1], json!({ "role": "user", "content": "hi" }));
        assert_eq!(v["messages"][2]["role"], "assistant");
        assert_eq!(v["messages"][3]["content"], "explain torque");
    }

    #[test]
    fn test_structured_content_is_kept_in_order() {
        let turns = vec![ConversationTurn {
            role: Role::User,
            content: TurnContent::Parts(vec![
                ContentPart::Text { text: "look".to_string() },
                ContentPart::image("https://example.com/graph.png"),
            ]),
        }];
        let req = OpenAIRequest::from_turns("openai/gpt-5".to_string(), "PERSONA", &turns);
        let v = serde_json::to_value(&req).unwrap();

        assert_eq!(
            v["messages"][1]["content"],
            json!([
                { "type": "text", "text": "look" },
                { "type": "image_url", "image_url": { "url": "https://example.com/graph.png" } }
            ])
        );
    }
}
