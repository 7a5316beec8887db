const SENTENCE_BREAK: &str = ". ";
const MAX_SENTENCES: usize = 2;

/// Keep at most the first two `". "`-separated sentences. A shortened reply
/// ends with exactly one period; a reply that already fits is returned as is.
pub fn truncate_to_sentences(reply: &str) -> String {
    let parts: Vec<&str> = reply.split(SENTENCE_BREAK).collect();
    if parts.len() <= MAX_SENTENCES {
        return reply.to_string();
    }

    let kept = parts[..MAX_SENTENCES].join(SENTENCE_BREAK);
    format!("{}.", kept.trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sentences_become_two() {
        let reply = "Rinse the jar. Remove the lid. Put it in the glass bin. Done.";
        assert_eq!(truncate_to_sentences(reply), "Rinse the jar. Remove the lid.");
    }

    #[test]
    fn short_replies_are_unchanged() {
        assert_eq!(truncate_to_sentences("Yes."), "Yes.");
        assert_eq!(
            truncate_to_sentences("Yes. Rinse it first."),
            "Yes. Rinse it first."
        );
        assert_eq!(truncate_to_sentences(""), "");
    }

    #[test]
    fn trailing_periods_collapse_to_one() {
        let reply = "Compost it... Or bin it.. Then wash up. Thanks.";
        assert_eq!(truncate_to_sentences(reply), "Compost it... Or bin it.");
    }
}
