//! C source literal view

use std::fmt::Write;

/// Literal shown for an empty byte sequence
pub const EMPTY_LITERAL: &str = "uint8_t data[] = { };";

/// Render bytes as a C array initializer
/// Example: [0, 255, 16] -> "uint8_t data[] = { 0x00, 0xFF, 0x10 };"
pub fn source_literal(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return EMPTY_LITERAL.to_string();
    }

    let mut result = String::with_capacity(22 + bytes.len() * 6);
    result.push_str("uint8_t data[] = { ");
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        let _ = write!(&mut result, "0x{:02X}", byte);
    }
    result.push_str(" };");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_literal() {
        assert_eq!(
            source_literal(&[0, 255, 16]),
            "uint8_t data[] = { 0x00, 0xFF, 0x10 };"
        );
        assert_eq!(source_literal(&[0xAB]), "uint8_t data[] = { 0xAB };");
    }

    #[test]
    fn test_source_literal_empty() {
        assert_eq!(source_literal(&[]), "uint8_t data[] = { };");
        assert_eq!(source_literal(&[]), EMPTY_LITERAL);
    }
}
