pub mod engine;
pub mod states;

pub use engine::{DialogueFlow, FlowDefinition, FlowEngine, FlowTransitionError, OnboardingFlow};
pub use states::{FlowAction, FlowEvent, FlowState, FlowType, TransitionOutcome};
