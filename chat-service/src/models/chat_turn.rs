use super::Language;

/// One question/answer exchange. Built per request and dropped with the
/// response; nothing is kept between turns.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub user_message: String,
    pub language: Language,
    pub reply: Option<String>,
}

impl ChatTurn {
    pub fn new(user_message: impl Into<String>, language: Language) -> Self {
        Self {
            user_message: user_message.into(),
            language,
            reply: None,
        }
    }

    /// The trimmed question, or `None` when there is nothing to ask.
    pub fn question(&self) -> Option<&str> {
        let trimmed = self.user_message.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn with_reply(mut self, reply: String) -> Self {
        self.reply = Some(reply);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_message_has_no_question() {
        let turn = ChatTurn::new("  \n\t ", Language::English);
        assert_eq!(turn.question(), None);
    }

    #[test]
    fn question_is_trimmed() {
        let turn = ChatTurn::new("  can I recycle foil?  ", Language::Spanish);
        assert_eq!(turn.question(), Some("can I recycle foil?"));
    }
}
