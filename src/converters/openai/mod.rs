pub mod openai_content;
pub mod openai_message;
pub mod openai_request;
pub mod openai_response;

pub use openai_content::OpenAIContent;
pub use openai_message::OpenAIMessage;
pub use openai_request::OpenAIRequest;
pub use openai_response::OpenAIResponse;
