pub mod intent;
pub mod prompt;
pub mod providers;
pub mod reply;

pub use intent::analyze_intent;
pub use prompt::{build_prompt, is_greeting};
pub use providers::{GenerationBackend, GenerationParams, MockBackend, OllamaBackend, ProviderError};
pub use reply::truncate_to_sentences;
