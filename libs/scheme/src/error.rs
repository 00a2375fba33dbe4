//! Error types for identity parsing.

use thiserror::Error;

/// Errors that can occur when parsing identity strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// The input does not match the expected identifier grammar.
    #[error("unexpected GroupVersion string: {input}")]
    MalformedIdentifier { input: String },
}

impl SchemeError {
    pub(crate) fn malformed(input: &str) -> Self {
        SchemeError::MalformedIdentifier {
            input: input.to_string(),
        }
    }

    /// Returns true if this error indicates a malformed identifier.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SchemeError::MalformedIdentifier { .. })
    }

    /// Returns the offending input string.
    pub fn input(&self) -> &str {
        match self {
            SchemeError::MalformedIdentifier { input } => input,
        }
    }
}
