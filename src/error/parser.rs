use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("malformed resistance value '{token}' at position {position}")]
    MalformedNumber { token: String, position: usize },

    #[error("circuit must start with the generator marker '+': {input}")]
    MissingGeneratorMarker { input: String },

    #[error("circuit must end with the terminator '-': {input}")]
    MissingTerminator { input: String },
}

impl ParserError {
    pub fn malformed_number(token: impl Into<String>, position: usize) -> Self {
        Self::MalformedNumber {
            token: token.into(),
            position,
        }
    }

    pub fn missing_generator_marker(input: impl Into<String>) -> Self {
        Self::MissingGeneratorMarker {
            input: input.into(),
        }
    }

    pub fn missing_terminator(input: impl Into<String>) -> Self {
        Self::MissingTerminator {
            input: input.into(),
        }
    }

    /// True for failures of the outer `+ ... -` framing rather than of a token.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MissingGeneratorMarker { .. } | Self::MissingTerminator { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_number_display() {
        let err = ParserError::malformed_number("1.2.3", 4);
        assert_eq!(
            err.to_string(),
            "malformed resistance value '1.2.3' at position 4"
        );
    }

    #[test]
    fn test_missing_terminator_display() {
        let err = ParserError::missing_terminator("+10_20");
        assert_eq!(
            err.to_string(),
            "circuit must end with the terminator '-': +10_20"
        );
        assert!(err.is_format_error());
    }

    #[test]
    fn test_malformed_number_is_not_format_error() {
        assert!(!ParserError::malformed_number("10.", 1).is_format_error());
    }
}
