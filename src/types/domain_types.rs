// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use crate::error::RequestError;
use std::fmt;

/// API key for the monitoring API
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key; blank keys are a missing credential
    pub fn new(key: impl Into<String>) -> Result<Self, RequestError> {
        let key = key.into();

        if key.trim().is_empty() {
            return Err(RequestError::MissingCredential);
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "{}...", visible)
    }
}

// Debug goes to logs too, so it is redacted as well.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}
