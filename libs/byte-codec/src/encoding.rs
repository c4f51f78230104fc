//! Textual encodings of a byte sequence
//!
//! Provides a type-safe tag for the four input/output fields a byte
//! sequence is rendered into.

use serde::{Deserialize, Serialize};

/// Textual encoding of a byte sequence
///
/// For the bytes `[72, 105]`:
/// - `Decimal`: `72 105`
/// - `Hexadecimal`: `48 69`
/// - `Binary`: `01001000 01101001`
/// - `Ascii`: `Hi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Base-10 tokens, one per byte
    Decimal,

    /// Base-16 tokens, optional `0x` prefix
    Hexadecimal,

    /// Base-2 tokens, optional `0b` prefix
    Binary,

    /// One character per byte
    Ascii,
}

impl Encoding {
    /// All encodings in field order
    pub const ALL: [Encoding; 4] = [
        Encoding::Decimal,
        Encoding::Hexadecimal,
        Encoding::Binary,
        Encoding::Ascii,
    ];

    /// Convert from the short and long names used on the command line
    ///
    /// Supports:
    /// - "dec", "decimal" → Decimal
    /// - "hex", "hexadecimal" → Hexadecimal
    /// - "bin", "binary" → Binary
    /// - "ascii", "text" → Ascii
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dec" | "decimal" => Some(Self::Decimal),
            "hex" | "hexadecimal" => Some(Self::Hexadecimal),
            "bin" | "binary" => Some(Self::Binary),
            "ascii" | "text" => Some(Self::Ascii),
            _ => None,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Binary => "binary",
            Self::Ascii => "ASCII",
        }
    }

    /// Get the short trigger name
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Decimal => "dec",
            Self::Hexadecimal => "hex",
            Self::Binary => "bin",
            Self::Ascii => "ascii",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Encoding::from_str("dec"), Some(Encoding::Decimal));
        assert_eq!(Encoding::from_str("DECIMAL"), Some(Encoding::Decimal));
        assert_eq!(Encoding::from_str("hex"), Some(Encoding::Hexadecimal));
        assert_eq!(Encoding::from_str(" Bin "), Some(Encoding::Binary));
        assert_eq!(Encoding::from_str("ascii"), Some(Encoding::Ascii));
        assert_eq!(Encoding::from_str("text"), Some(Encoding::Ascii));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(Encoding::from_str("octal"), None);
        assert_eq!(Encoding::from_str(""), None);
    }

    #[test]
    fn test_short_name_roundtrip() {
        for encoding in Encoding::ALL {
            assert_eq!(Encoding::from_str(encoding.short_name()), Some(encoding));
        }
    }
}
