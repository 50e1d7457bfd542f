//! Domain error model.

use thiserror::Error;

/// Result type used across the workspace.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Naming operations themselves never fail (an absent prefix is a branch, not
/// an error). This covers the edges: configuration and input parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("NAMING_DEMO_ROLLS: not a number");
        assert_eq!(
            err.to_string(),
            "validation failed: NAMING_DEMO_ROLLS: not a number"
        );
    }
}
