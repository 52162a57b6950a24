pub mod client;
pub mod prompts;
pub mod types;

pub use client::LlmClient;
pub use types::ChatMessage;
