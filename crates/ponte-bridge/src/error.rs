//! Error types for bridge operations

/// Result type for fallible bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors raised by the two fallible bridge operations.
///
/// Only `to_number` and `to_binary` abort the caller's operation. Every other
/// operation reports failure silently: predicates return `false`, object and
/// callable coercions return an invalid handle checked with `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// Numeric coercion yielded NaN (`to_number`)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The value is not one of the representations the operation accepts
    /// (`to_binary`)
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Description of the accepted representations
        expected: String,
        /// What the value actually was
        got: String,
    },
}

impl BridgeError {
    /// Build an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BridgeError::InvalidArgument(message.into())
    }

    /// Build a `TypeMismatch` error
    pub fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        BridgeError::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = BridgeError::invalid_argument("numeric coercion produced NaN");
        assert_eq!(
            err.to_string(),
            "invalid argument: numeric coercion produced NaN"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = BridgeError::type_mismatch("array buffer", "string");
        assert_eq!(
            err.to_string(),
            "type mismatch: expected array buffer, got string"
        );
    }
}
