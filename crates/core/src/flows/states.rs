use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowType {
    Onboarding,
    Dialogue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    Start,
    NameCollected,
    EmailCollected,
    Ready,
    Running,
    Exiting,
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Exiting)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowEvent {
    NameSubmitted,
    EmailRejected,
    EmailAccepted,
    GreetingSent,
    BlankInput,
    ExitRequested,
    TurnAnswered,
    ContinueAccepted,
    ContinueDeclined,
}

/// Console side effects a transition asks the driver to perform, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowAction {
    PromptForEmail,
    RejectEmail,
    Greet,
    SayFarewell,
    AskToContinue,
    Encourage,
    SayClosing,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub from: FlowState,
    pub to: FlowState,
    pub event: FlowEvent,
    pub actions: Vec<FlowAction>,
}
