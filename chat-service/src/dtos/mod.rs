pub mod chat;
pub mod intents;

pub use chat::{ChatRequest, ChatResponse};
pub use intents::{IntentResult, IntentTestRequest, IntentTestResponse};
