use crate::domain::intent::{classify_intent, Intent};

pub const EXIT_KEYWORDS: &[&str] = &["bye", "goodbye", "exit", "quit"];
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["yes", "y"];
pub const DECLINE_TO_CONTINUE_ANSWERS: &[&str] = &["no", "n", "nope"];

/// Trimmed, lower-cased form used for every keyword comparison.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One line of user input in the main dialogue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub raw: String,
    pub normalized: String,
    pub intent: Intent,
}

impl Turn {
    /// Returns `None` for blank lines, which the dialogue skips silently.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            raw: trimmed.to_owned(),
            normalized: normalize(trimmed),
            intent: classify_intent(trimmed),
        })
    }

    pub fn is_exit_request(&self) -> bool {
        EXIT_KEYWORDS.contains(&self.normalized.as_str())
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    AFFIRMATIVE_ANSWERS.contains(&normalize(answer).as_str())
}

pub fn declines_to_continue(answer: &str) -> bool {
    DECLINE_TO_CONTINUE_ANSWERS.contains(&normalize(answer).as_str())
}
