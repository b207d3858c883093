pub mod anthropic_content;
pub mod anthropic_message;
pub mod anthropic_request;
pub mod anthropic_response;

pub use anthropic_content::AnthropicContent;
pub use anthropic_message::AnthropicMessage;
pub use anthropic_request::AnthropicRequest;
pub use anthropic_response::AnthropicResponse;
