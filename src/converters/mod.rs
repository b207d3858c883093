pub mod openai;
pub mod anthropic;
