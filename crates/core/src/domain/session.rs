use serde::{Deserialize, Serialize};

use crate::domain::email::is_valid_email;
use crate::errors::DomainError;

pub const GUEST_NAME: &str = "Guest";

/// Identity collected during onboarding. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    name: String,
    email: String,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(DomainError::InvariantViolation(
                "session email must contain `@` and `.`".to_owned(),
            ));
        }
        Ok(Self { name: name.into(), email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Trims the raw name line, substituting the guest name when nothing is left.
pub fn resolve_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        GUEST_NAME.to_owned()
    } else {
        trimmed.to_owned()
    }
}
