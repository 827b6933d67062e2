//! Agent runtime for the chatdesk assistant.
//!
//! Onboarding collects a name and a shape-checked email, then each turn is
//! classified by keyword and routed to a handler:
//!
//! - **Info / Unknown** - fixed replies (`handlers`)
//! - **Joke** - generated by an injected [`llm::LlmClient`]; failures become a
//!   fixed sentence and the dialogue continues
//! - **Task** - simulated booking with a yes/no confirmation
//!
//! State transitions come from the `chatdesk_core::flows` engines; the
//! [`conversation::Conversation`] driver only reads input and renders actions.

pub mod console;
pub mod conversation;
pub mod handlers;
pub mod llm;
pub mod runtime;

pub use console::{Console, LineConsole};
pub use conversation::{ConversationError, ConversationSummary, SessionOutcome};
pub use llm::{GenerationError, LlmClient, OpenAiClient};
pub use runtime::AgentRuntime;
