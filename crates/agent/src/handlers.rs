use chatdesk_core::domain::session::Session;
use chatdesk_core::domain::turn::is_affirmative;
use chatdesk_core::messages;
use tracing::warn;

use crate::llm::LlmClient;

pub fn info_reply() -> &'static str {
    messages::INFO_RESPONSE
}

pub fn clarification_reply() -> &'static str {
    messages::CLARIFY
}

/// Answer to the booking offer. Anything but yes/y is a decline; nothing is
/// actually booked either way.
pub fn booking_reply(confirmation: &str) -> &'static str {
    if is_affirmative(confirmation) {
        messages::TASK_BOOKED
    } else {
        messages::TASK_DECLINED
    }
}

/// Asks the model for a joke about the user. Failures are absorbed into a
/// fixed sentence and never retried.
pub async fn joke_reply(llm: &dyn LlmClient, session: &Session) -> String {
    match llm.complete(&messages::joke_prompt(session.name())).await {
        Ok(text) => {
            let joke = text.trim();
            if joke.is_empty() {
                warn!(event_name = "llm.response.empty", "model returned an empty joke");
                messages::JOKE_EMPTY.to_string()
            } else {
                joke.to_string()
            }
        }
        Err(error) => {
            warn!(event_name = "llm.request.failed", error = %error, "joke generation failed");
            messages::GENERATION_FAILED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chatdesk_core::domain::session::Session;
    use chatdesk_core::messages;

    use super::{booking_reply, joke_reply};
    use crate::llm::{GenerationError, LlmClient};

    struct RecordingLlm {
        reply: Result<String, GenerationError>,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingLlm {
        fn new(reply: Result<String, GenerationError>) -> Self {
            Self { reply, prompts: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl LlmClient for RecordingLlm {
        async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().expect("prompt log").push(prompt.to_string());
            self.reply.clone()
        }
    }

    fn session() -> Session {
        Session::new("Ann", "a@a.com").expect("valid session")
    }

    #[tokio::test]
    async fn joke_prompt_embeds_session_name_and_reply_is_trimmed() {
        let llm = RecordingLlm::new(Ok("  Why did Ann cross the road?\n".to_string()));

        let reply = joke_reply(&llm, &session()).await;

        assert_eq!(reply, "Why did Ann cross the road?");
        assert_eq!(*llm.prompts.lock().expect("prompt log"), vec!["Tell me a joke about Ann."]);
    }

    #[tokio::test]
    async fn blank_joke_uses_fallback_sentence() {
        let llm = RecordingLlm::new(Ok("   ".to_string()));
        assert_eq!(joke_reply(&llm, &session()).await, messages::JOKE_EMPTY);
    }

    #[tokio::test]
    async fn generation_failure_is_absorbed_without_retry() {
        let llm = RecordingLlm::new(Err(GenerationError::Status {
            status: 429,
            body: "quota exceeded".to_string(),
        }));

        assert_eq!(joke_reply(&llm, &session()).await, messages::GENERATION_FAILED);
        assert_eq!(llm.prompts.lock().expect("prompt log").len(), 1);
    }

    #[test]
    fn booking_confirms_only_on_yes() {
        assert_eq!(booking_reply("YES"), messages::TASK_BOOKED);
        assert_eq!(booking_reply("y"), messages::TASK_BOOKED);
        assert_eq!(booking_reply("sure"), messages::TASK_DECLINED);
        assert_eq!(booking_reply(""), messages::TASK_DECLINED);
    }
}
