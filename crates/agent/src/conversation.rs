use std::io;

use chatdesk_core::domain::intent::Intent;
use chatdesk_core::domain::session::{resolve_name, Session, GUEST_NAME};
use chatdesk_core::domain::turn::{declines_to_continue, Turn};
use chatdesk_core::errors::DomainError;
use chatdesk_core::flows::{
    DialogueFlow, FlowAction, FlowEngine, FlowEvent, FlowState, OnboardingFlow,
};
use chatdesk_core::is_valid_email;
use chatdesk_core::messages;
use thiserror::Error;
use tracing::{debug, info};

use crate::console::Console;
use crate::handlers;
use crate::llm::LlmClient;

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("console i/o failed: {0}")]
    Console(#[from] io::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed an exit keyword.
    Farewell,
    /// The user answered no to the continuation question.
    Declined,
    /// Console input ran out before the dialogue ended.
    InputClosed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationSummary {
    pub outcome: SessionOutcome,
    pub session: Option<Session>,
    pub turns_handled: usize,
}

enum Step<T> {
    Continue(T),
    InputClosed,
}

/// Drives onboarding and then the main dialogue over a single console.
pub struct Conversation<'a, C> {
    console: &'a mut C,
    llm: &'a dyn LlmClient,
    onboarding: FlowEngine<OnboardingFlow>,
    dialogue: FlowEngine<DialogueFlow>,
}

impl<'a, C> Conversation<'a, C>
where
    C: Console,
{
    pub fn new(console: &'a mut C, llm: &'a dyn LlmClient) -> Self {
        Self {
            console,
            llm,
            onboarding: FlowEngine::default(),
            dialogue: FlowEngine::default(),
        }
    }

    pub async fn run(mut self) -> Result<ConversationSummary, ConversationError> {
        let session = match self.onboard()? {
            Step::Continue(session) => session,
            Step::InputClosed => {
                info!(event_name = "conversation.input_closed", stage = "onboarding");
                return Ok(ConversationSummary {
                    outcome: SessionOutcome::InputClosed,
                    session: None,
                    turns_handled: 0,
                });
            }
        };

        let (outcome, turns_handled) = self.converse(&session).await?;
        Ok(ConversationSummary { outcome, session: Some(session), turns_handled })
    }

    fn onboard(&mut self) -> Result<Step<Session>, ConversationError> {
        self.console.say(messages::OPENING)?;
        self.console.say(messages::ASK_NAME)?;

        let name = match self.console.read_line()? {
            Some(raw) => resolve_name(&raw),
            None => return Ok(Step::InputClosed),
        };

        let mut state = self.onboarding.initial_state();
        let mut event = FlowEvent::NameSubmitted;
        let mut email = String::new();
        let mut rejected_attempts = 0_u32;

        loop {
            let outcome = self.onboarding.apply(&state, &event).map_err(DomainError::from)?;
            self.perform(&outcome.actions, &name)?;
            state = outcome.to;

            if state.is_terminal() {
                break;
            }

            event = match state {
                FlowState::NameCollected => match self.console.read_line()? {
                    Some(raw) if is_valid_email(raw.trim()) => {
                        email = raw.trim().to_string();
                        FlowEvent::EmailAccepted
                    }
                    Some(_) => {
                        rejected_attempts += 1;
                        debug!(
                            event_name = "onboarding.email_rejected",
                            attempt = rejected_attempts
                        );
                        FlowEvent::EmailRejected
                    }
                    None => return Ok(Step::InputClosed),
                },
                FlowState::EmailCollected => FlowEvent::GreetingSent,
                other => {
                    return Err(DomainError::InvariantViolation(format!(
                        "onboarding has no input for state {other:?}"
                    ))
                    .into())
                }
            };
        }

        let guest = name == GUEST_NAME;
        info!(
            event_name = "onboarding.completed",
            rejected_attempts,
            guest,
            "onboarding finished"
        );
        Ok(Step::Continue(Session::new(name, email)?))
    }

    async fn converse(
        &mut self,
        session: &Session,
    ) -> Result<(SessionOutcome, usize), ConversationError> {
        let mut state = self.dialogue.initial_state();
        let mut turns_handled = 0_usize;

        loop {
            let Some(line) = self.console.read_line()? else {
                info!(event_name = "conversation.input_closed", stage = "dialogue");
                return Ok((SessionOutcome::InputClosed, turns_handled));
            };

            let event = match Turn::parse(&line) {
                None => FlowEvent::BlankInput,
                Some(turn) if turn.is_exit_request() => FlowEvent::ExitRequested,
                Some(turn) => {
                    info!(
                        event_name = "conversation.turn.classified",
                        intent = %turn.intent,
                        input_chars = turn.raw.chars().count(),
                        "dispatching turn"
                    );
                    if let Step::InputClosed = self.respond(&turn, session).await? {
                        info!(event_name = "conversation.input_closed", stage = "task");
                        return Ok((SessionOutcome::InputClosed, turns_handled));
                    }
                    turns_handled += 1;
                    FlowEvent::TurnAnswered
                }
            };

            state = self.advance(&state, &event, session)?;
            if state.is_terminal() {
                return Ok((SessionOutcome::Farewell, turns_handled));
            }

            if event == FlowEvent::TurnAnswered {
                let Some(answer) = self.console.read_line()? else {
                    info!(event_name = "conversation.input_closed", stage = "continuation");
                    return Ok((SessionOutcome::InputClosed, turns_handled));
                };
                let follow_up = if declines_to_continue(&answer) {
                    FlowEvent::ContinueDeclined
                } else {
                    FlowEvent::ContinueAccepted
                };

                state = self.advance(&state, &follow_up, session)?;
                if state.is_terminal() {
                    return Ok((SessionOutcome::Declined, turns_handled));
                }
            }
        }
    }

    fn advance(
        &mut self,
        state: &FlowState,
        event: &FlowEvent,
        session: &Session,
    ) -> Result<FlowState, ConversationError> {
        let outcome = self.dialogue.apply(state, event).map_err(DomainError::from)?;
        self.perform(&outcome.actions, session.name())?;
        Ok(outcome.to)
    }

    async fn respond(
        &mut self,
        turn: &Turn,
        session: &Session,
    ) -> Result<Step<()>, ConversationError> {
        match turn.intent {
            Intent::Info => self.console.say(handlers::info_reply())?,
            Intent::Joke => {
                let reply = handlers::joke_reply(self.llm, session).await;
                self.console.say(&reply)?;
            }
            Intent::Task => {
                self.console.say(messages::TASK_OFFER)?;
                self.console.say(messages::TASK_CONFIRM_QUESTION)?;
                let Some(confirmation) = self.console.read_line()? else {
                    return Ok(Step::InputClosed);
                };
                self.console.say(handlers::booking_reply(&confirmation))?;
            }
            Intent::Unknown => self.console.say(handlers::clarification_reply())?,
        }
        Ok(Step::Continue(()))
    }

    fn perform(&mut self, actions: &[FlowAction], name: &str) -> io::Result<()> {
        for action in actions {
            match action {
                FlowAction::PromptForEmail => self.console.say(&messages::ask_email(name))?,
                FlowAction::RejectEmail => self.console.say(messages::INVALID_EMAIL)?,
                FlowAction::Greet => self.console.say(&messages::ready_greeting(name))?,
                FlowAction::SayFarewell => self.console.say(messages::FAREWELL)?,
                FlowAction::AskToContinue => self.console.say(messages::ASK_CONTINUE)?,
                FlowAction::Encourage => self.console.say(messages::ENCOURAGE)?,
                FlowAction::SayClosing => self.console.say(messages::CLOSING)?,
            }
        }
        Ok(())
    }
}
