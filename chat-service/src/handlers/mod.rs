pub mod chat;
pub mod health;
pub mod intents;

pub use chat::{chat, ChatError};
pub use health::health_check;
pub use intents::test_intents;
