use crate::models::ResponseType;
use crate::services::prompt::is_greeting;

const DETAIL_INDICATORS: [&str; 17] = [
    "how to",
    "explain",
    "what is",
    "why",
    "process",
    "steps",
    "guide",
    "tutorial",
    "detailed",
    "comprehensive",
    "complete",
    "tell me about",
    "walk me through",
    "show me",
    "teach me",
    "what are the benefits",
    "what should i do",
];

const BRIEF_INDICATORS: [&str; 10] = [
    "yes or no",
    "quickly",
    "briefly",
    "short answer",
    "simple",
    "can i",
    "is it",
    "does it",
    "will it",
    "should i",
];

/// Guess how long an answer the user expects. Greetings and messages of at
/// most three characters are brief; detail phrases win over brief phrases.
pub fn analyze_intent(message: &str) -> ResponseType {
    let lowered = message.to_lowercase();
    let trimmed = lowered.trim();

    if is_greeting(trimmed) || trimmed.chars().count() <= 3 {
        return ResponseType::Brief;
    }

    if DETAIL_INDICATORS.iter().any(|p| trimmed.contains(p)) {
        ResponseType::Detailed
    } else if BRIEF_INDICATORS.iter().any(|p| trimmed.contains(p)) {
        ResponseType::Brief
    } else {
        ResponseType::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_and_short_messages_are_brief() {
        assert_eq!(analyze_intent("Hello"), ResponseType::Brief);
        assert_eq!(analyze_intent("ok?"), ResponseType::Brief);
        assert_eq!(analyze_intent(""), ResponseType::Brief);
    }

    #[test]
    fn detail_phrases_are_detailed() {
        assert_eq!(
            analyze_intent("Explain the composting process"),
            ResponseType::Detailed
        );
        assert_eq!(
            analyze_intent("Walk me through sorting e-waste"),
            ResponseType::Detailed
        );
    }

    #[test]
    fn detail_wins_over_brief() {
        assert_eq!(
            analyze_intent("Can I get a guide to recycling glass?"),
            ResponseType::Detailed
        );
    }

    #[test]
    fn brief_phrases_are_brief() {
        assert_eq!(
            analyze_intent("Can I put foil in the blue bin?"),
            ResponseType::Brief
        );
    }

    #[test]
    fn everything_else_is_moderate() {
        assert_eq!(
            analyze_intent("Plastic bags at the supermarket"),
            ResponseType::Moderate
        );
    }
}
