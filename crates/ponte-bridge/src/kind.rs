//! Coarse value classification used in diagnostics

/// The native semantic kind of a host value, derived from the bridge
/// predicates. Used to report what a value actually was in
/// `TypeMismatch` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Empty/sentinel handle (`is_valid` is false)
    Invalid,
    /// The engine's undefined singleton
    Undefined,
    /// The engine's null singleton
    Null,
    /// Boolean value
    Boolean,
    /// Numeric value
    Number,
    /// String value
    String,
    /// Date value
    Date,
    /// Array value
    Array,
    /// Callable value
    Function,
    /// One of the binary-capable representations
    Binary,
    /// Any other object-shaped value
    Object,
}

impl ValueKind {
    /// Lowercase name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Invalid => "invalid",
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Date => "date",
            ValueKind::Array => "array",
            ValueKind::Function => "function",
            ValueKind::Binary => "binary",
            ValueKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ValueKind::Invalid.name(), "invalid");
        assert_eq!(ValueKind::Binary.name(), "binary");
        assert_eq!(ValueKind::Object.to_string(), "object");
    }
}
