pub mod config;
pub mod domain;
pub mod errors;
pub mod flows;
pub mod messages;

pub use domain::email::is_valid_email;
pub use domain::intent::{classify_intent, Intent};
pub use domain::session::{resolve_name, Session, GUEST_NAME};
pub use domain::turn::{declines_to_continue, is_affirmative, normalize, Turn};
pub use errors::DomainError;
pub use flows::{
    DialogueFlow, FlowAction, FlowEngine, FlowEvent, FlowState, FlowTransitionError,
    OnboardingFlow, TransitionOutcome,
};
