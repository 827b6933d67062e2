use serde::{Deserialize, Serialize};

pub const JOKE_KEYWORDS: &[&str] = &["joke", "funny", "laugh"];
pub const TASK_KEYWORDS: &[&str] = &["book", "schedule", "appointment", "meet"];
pub const INFO_KEYWORDS: &[&str] = &["info", "information", "tell me about", "help", "service"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Info,
    Joke,
    Task,
    Unknown,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Joke => "JOKE",
            Self::Task => "TASK",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword rules in priority order. The first rule with a matching
/// substring decides the intent.
const RULES: &[(Intent, &[&str])] =
    &[(Intent::Joke, JOKE_KEYWORDS), (Intent::Task, TASK_KEYWORDS), (Intent::Info, INFO_KEYWORDS)];

pub fn classify_intent(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}
