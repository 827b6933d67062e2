use thiserror::Error;

use crate::flows::states::{FlowAction, FlowEvent, FlowState, FlowType, TransitionOutcome};

pub trait FlowDefinition {
    fn flow_type(&self) -> FlowType;
    fn initial_state(&self) -> FlowState;
    fn transition(
        &self,
        current: &FlowState,
        event: &FlowEvent,
    ) -> Result<TransitionOutcome, FlowTransitionError>;
}

#[derive(Clone, Debug, Default)]
pub struct OnboardingFlow;

impl FlowDefinition for OnboardingFlow {
    fn flow_type(&self) -> FlowType {
        FlowType::Onboarding
    }

    fn initial_state(&self) -> FlowState {
        FlowState::Start
    }

    fn transition(
        &self,
        current: &FlowState,
        event: &FlowEvent,
    ) -> Result<TransitionOutcome, FlowTransitionError> {
        transition_onboarding(current, event)
    }
}

#[derive(Clone, Debug, Default)]
pub struct DialogueFlow;

impl FlowDefinition for DialogueFlow {
    fn flow_type(&self) -> FlowType {
        FlowType::Dialogue
    }

    fn initial_state(&self) -> FlowState {
        FlowState::Running
    }

    fn transition(
        &self,
        current: &FlowState,
        event: &FlowEvent,
    ) -> Result<TransitionOutcome, FlowTransitionError> {
        transition_dialogue(current, event)
    }
}

pub struct FlowEngine<F> {
    flow: F,
}

impl<F> FlowEngine<F>
where
    F: FlowDefinition,
{
    pub fn new(flow: F) -> Self {
        Self { flow }
    }

    pub fn flow_type(&self) -> FlowType {
        self.flow.flow_type()
    }

    pub fn initial_state(&self) -> FlowState {
        self.flow.initial_state()
    }

    pub fn apply(
        &self,
        current: &FlowState,
        event: &FlowEvent,
    ) -> Result<TransitionOutcome, FlowTransitionError> {
        self.flow.transition(current, event)
    }
}

impl Default for FlowEngine<OnboardingFlow> {
    fn default() -> Self {
        Self::new(OnboardingFlow)
    }
}

impl Default for FlowEngine<DialogueFlow> {
    fn default() -> Self {
        Self::new(DialogueFlow)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FlowTransitionError {
    #[error("invalid transition from {state:?} using event {event:?}")]
    InvalidTransition { state: FlowState, event: FlowEvent },
}

fn transition_onboarding(
    current: &FlowState,
    event: &FlowEvent,
) -> Result<TransitionOutcome, FlowTransitionError> {
    use FlowAction::{Greet, PromptForEmail, RejectEmail};
    use FlowEvent::{EmailAccepted, EmailRejected, GreetingSent, NameSubmitted};
    use FlowState::{EmailCollected, NameCollected, Ready, Start};

    let (to, actions) = match (current, event) {
        (Start, NameSubmitted) => (NameCollected, vec![PromptForEmail]),
        // No attempt cap: a bad address keeps the flow where it is.
        (NameCollected, EmailRejected) => (NameCollected, vec![RejectEmail, PromptForEmail]),
        (NameCollected, EmailAccepted) => (EmailCollected, vec![Greet]),
        (EmailCollected, GreetingSent) => (Ready, Vec::new()),
        _ => {
            return Err(FlowTransitionError::InvalidTransition { state: *current, event: *event })
        }
    };

    Ok(TransitionOutcome { from: *current, to, event: *event, actions })
}

fn transition_dialogue(
    current: &FlowState,
    event: &FlowEvent,
) -> Result<TransitionOutcome, FlowTransitionError> {
    use FlowAction::{AskToContinue, Encourage, SayClosing, SayFarewell};
    use FlowEvent::{BlankInput, ContinueAccepted, ContinueDeclined, ExitRequested, TurnAnswered};
    use FlowState::{Exiting, Running};

    let (to, actions) = match (current, event) {
        (Running, BlankInput) => (Running, Vec::new()),
        (Running, ExitRequested) => (Exiting, vec![SayFarewell]),
        (Running, TurnAnswered) => (Running, vec![AskToContinue]),
        (Running, ContinueAccepted) => (Running, vec![Encourage]),
        (Running, ContinueDeclined) => (Exiting, vec![SayClosing]),
        _ => {
            return Err(FlowTransitionError::InvalidTransition { state: *current, event: *event })
        }
    };

    Ok(TransitionOutcome { from: *current, to, event: *event, actions })
}
