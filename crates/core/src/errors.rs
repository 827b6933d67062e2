use thiserror::Error;

use crate::flows::FlowTransitionError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    FlowTransition(#[from] FlowTransitionError),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use crate::errors::DomainError;
    use crate::flows::{FlowEvent, FlowState, FlowTransitionError};

    #[test]
    fn flow_error_converts_transparently() {
        let flow_error = FlowTransitionError::InvalidTransition {
            state: FlowState::Exiting,
            event: FlowEvent::ContinueAccepted,
        };
        let domain = DomainError::from(flow_error.clone());

        assert_eq!(domain.to_string(), flow_error.to_string());
        assert!(matches!(domain, DomainError::FlowTransition(_)));
    }

    #[test]
    fn invariant_violation_names_the_rule() {
        let error = DomainError::InvariantViolation("email must contain `@`".to_owned());
        assert_eq!(error.to_string(), "domain invariant violation: email must contain `@`");
    }
}
