//! Byte Codec Error Types

use thiserror::Error;

use crate::encoding::Encoding;

/// Result type for byte-codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Byte codec errors
///
/// Every variant names the input field that produced it, so a caller can
/// flag that field alone and leave the others untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A token failed its format or range check
    #[error("invalid {encoding} input: malformed token '{token}'")]
    MalformedToken { encoding: Encoding, token: String },

    /// Input parsed cleanly but held no bytes
    #[error("invalid {0} input: no bytes")]
    EmptyInput(Encoding),
}

// Helper methods for creating errors
impl CodecError {
    pub fn malformed(encoding: Encoding, token: impl Into<String>) -> Self {
        CodecError::MalformedToken {
            encoding,
            token: token.into(),
        }
    }

    pub fn empty(encoding: Encoding) -> Self {
        CodecError::EmptyInput(encoding)
    }

    /// Input field that produced this error
    pub fn encoding(&self) -> Encoding {
        match self {
            CodecError::MalformedToken { encoding, .. } => *encoding,
            CodecError::EmptyInput(encoding) => *encoding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodecError::malformed(Encoding::Decimal, "256");
        assert_eq!(
            err.to_string(),
            "invalid decimal input: malformed token '256'"
        );

        let err = CodecError::empty(Encoding::Ascii);
        assert_eq!(err.to_string(), "invalid ASCII input: no bytes");
    }

    #[test]
    fn test_error_encoding() {
        assert_eq!(
            CodecError::malformed(Encoding::Binary, "201").encoding(),
            Encoding::Binary
        );
        assert_eq!(
            CodecError::empty(Encoding::Hexadecimal).encoding(),
            Encoding::Hexadecimal
        );
    }
}
