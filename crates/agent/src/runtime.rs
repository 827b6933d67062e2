use std::sync::Arc;

use chatdesk_core::config::LlmConfig;
use tracing::info;

use crate::console::Console;
use crate::conversation::{Conversation, ConversationError, ConversationSummary};
use crate::llm::{GenerationError, LlmClient, OpenAiClient};

/// Owns the injected text-generation client and runs sessions against a console.
#[derive(Clone)]
pub struct AgentRuntime {
    llm: Arc<dyn LlmClient>,
}

impl AgentRuntime {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, GenerationError> {
        let client = OpenAiClient::from_config(config)?;
        info!(
            event_name = "system.bootstrap.llm_client_ready",
            model = %client.model(),
            "llm client initialized"
        );
        Ok(Self::new(Arc::new(client)))
    }

    pub async fn run<C>(&self, console: &mut C) -> Result<ConversationSummary, ConversationError>
    where
        C: Console,
    {
        info!(event_name = "conversation.started", "conversation started");
        let summary = Conversation::new(console, self.llm.as_ref()).run().await?;
        info!(
            event_name = "conversation.finished",
            outcome = ?summary.outcome,
            turns_handled = summary.turns_handled,
            "conversation finished"
        );
        Ok(summary)
    }
}
