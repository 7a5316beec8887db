//! Fixed prompt templates sent to the generation backend.

use crate::models::Language;

pub const GREETINGS: [&str; 6] = [
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

const GREETING_TEMPLATE: &str = "You are a friendly waste management expert. Greet the user warmly and briefly introduce how you can help with waste management, recycling, and sustainability questions. Keep it to 1-2 sentences. User said: ";

const BRIEF_EN: &str = "You are a waste management expert. Give a concise, direct answer in 1-2 sentences maximum. Be helpful but brief.

Rules:
- Maximum 2 sentences
- Direct and to the point
- Focus on the most important information
- Use simple language";

const BRIEF_HI: &str =
    "आप एक कचरा प्रबंधन विशेषज्ञ हैं। अधिकतम 1-2 वाक्यों में संक्षिप्त, सीधा उत्तर दें।";

const BRIEF_ES: &str =
    "Eres un experto en gestión de residuos. Da una respuesta concisa y directa en máximo 1-2 oraciones.";

pub const TOPIC_FOCUS: &str = "

Focus areas:
- Waste reduction and recycling
- Composting and organic waste
- Environmental sustainability
- Practical home/office solutions
- Local waste management practices

";

/// Exact match against [`GREETINGS`] after trimming and lower-casing.
pub fn is_greeting(message: &str) -> bool {
    let normalized = message.trim().to_lowercase();
    GREETINGS.contains(&normalized.as_str())
}

pub fn brief_instruction(language: Language) -> &'static str {
    match language {
        Language::English => BRIEF_EN,
        Language::Hindi => BRIEF_HI,
        Language::Spanish => BRIEF_ES,
    }
}

/// Compose the full prompt for one question.
pub fn build_prompt(message: &str, language: Language) -> String {
    if is_greeting(message) {
        return format!("{GREETING_TEMPLATE}{message}");
    }

    format!(
        "{}{}\nUser question: {}",
        brief_instruction(language),
        TOPIC_FOCUS,
        message
    )
}
