//! Text to byte sequence parsing
//!
//! Decimal, hexadecimal and binary input is split into tokens, one byte per
//! token. A single malformed token rejects the whole input; no partial
//! result is ever returned. ASCII input has no failure mode.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::encoding::Encoding;
use crate::error::{CodecError, Result};

static DECIMAL_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| token_regex(r"^[0-9]{1,3}$"));

static HEX_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| token_regex(r"^[0-9A-F]{1,2}$"));

static BINARY_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| token_regex(r"^[01]{1,8}$"));

fn token_regex(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| warn!("Invalid token pattern '{}': {}", pattern, e))
        .ok()
}

/// Check a token against a token pattern; a pattern that failed to compile
/// matches nothing
fn token_matches(pattern: &Option<Regex>, token: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(token))
}

// ============================================================================
// Tokenization
// ============================================================================

/// Split free-form text into byte tokens
///
/// Commas and the byte order mark count as whitespace; empty tokens are
/// discarded.
/// Example: `"1, 2,,3\n 4"` → `["1", "2", "3", "4"]`
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c == '\u{FEFF}' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Per-encoding parsers
// ============================================================================

/// Parse decimal tokens (`0`..=`255`, at most three digits)
pub fn parse_decimal(text: &str) -> Result<Vec<u8>> {
    tokenize(text)
        .into_iter()
        .map(|token| {
            if !token_matches(&DECIMAL_TOKEN, &token) {
                return Err(CodecError::malformed(Encoding::Decimal, token));
            }
            // Three digits may still exceed 255
            token
                .parse::<u8>()
                .map_err(|_| CodecError::malformed(Encoding::Decimal, token.as_str()))
        })
        .collect()
}

/// Parse hexadecimal tokens (`FF`, `0xff`, `a`)
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    tokenize(&text.to_uppercase())
        .into_iter()
        .map(|token| {
            let digits = token.strip_prefix("0X").unwrap_or(&token);
            if !token_matches(&HEX_TOKEN, digits) {
                return Err(CodecError::malformed(Encoding::Hexadecimal, token.as_str()));
            }
            u8::from_str_radix(digits, 16)
                .map_err(|_| CodecError::malformed(Encoding::Hexadecimal, token.as_str()))
        })
        .collect()
}

/// Parse binary tokens (`1010`, `0b11111111`), up to eight digits each
pub fn parse_binary(text: &str) -> Result<Vec<u8>> {
    tokenize(&text.to_lowercase())
        .into_iter()
        .map(|token| {
            let digits = token.strip_prefix("0b").unwrap_or(&token);
            if !token_matches(&BINARY_TOKEN, digits) {
                return Err(CodecError::malformed(Encoding::Binary, token.as_str()));
            }
            u8::from_str_radix(digits, 2)
                .map_err(|_| CodecError::malformed(Encoding::Binary, token.as_str()))
        })
        .collect()
}

/// Parse ASCII text, one byte per UTF-16 code unit
///
/// Each code unit keeps only its low 8 bits, so characters above U+00FF
/// are folded rather than rejected.
pub fn parse_ascii(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| (unit & 0xFF) as u8).collect()
}

/// Parse text in the given encoding into a byte sequence
pub fn parse(text: &str, encoding: Encoding) -> Result<Vec<u8>> {
    let result = match encoding {
        Encoding::Decimal => parse_decimal(text),
        Encoding::Hexadecimal => parse_hex(text),
        Encoding::Binary => parse_binary(text),
        Encoding::Ascii => Ok(parse_ascii(text)),
    };

    match &result {
        Ok(bytes) => debug!("Parsed {} {} bytes", bytes.len(), encoding),
        Err(e) => debug!("Parse failed: {}", e),
    }

    result
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("1, 2,,3\n 4"), vec!["1", "2", "3", "4"]);
        assert_eq!(tokenize("   "), Vec::<String>::new());
        assert_eq!(tokenize(",,,"), Vec::<String>::new());
        assert_eq!(tokenize("\tFF\t00 "), vec!["FF", "00"]);
    }

    #[test]
    fn test_tokenize_byte_order_mark() {
        assert_eq!(tokenize("\u{FEFF}FF"), vec!["FF"]);
        assert_eq!(tokenize("1\u{FEFF}2"), vec!["1", "2"]);
        assert_eq!(parse_hex("\u{FEFF}FF").unwrap(), vec![0xFF]);
        assert_eq!(parse_decimal("1\u{FEFF}2").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0 127 255").unwrap(), vec![0, 127, 255]);
        assert_eq!(parse_decimal("001,010").unwrap(), vec![1, 10]);
        assert_eq!(parse_decimal("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_decimal_rejects() {
        for input in ["256", "-1", "abc", "1 2 300", "1000", "+5", "1.5"] {
            assert!(parse_decimal(input).is_err(), "accepted: {}", input);
        }
    }

    #[test]
    fn test_parse_decimal_reports_token() {
        let err = parse_decimal("1 2 256 3").unwrap_err();
        assert_eq!(err, CodecError::malformed(Encoding::Decimal, "256"));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("DE ad 0xBE 0Xef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(parse_hex("f,0a").unwrap(), vec![0x0F, 0x0A]);
    }

    #[test]
    fn test_parse_hex_rejects() {
        for input in ["G1", "123", "0x", "0x123", "FF GG"] {
            assert!(parse_hex(input).is_err(), "accepted: {}", input);
        }
    }

    #[test]
    fn test_parse_binary() {
        assert_eq!(parse_binary("0 1 11111111").unwrap(), vec![0, 1, 255]);
        assert_eq!(parse_binary("0B101, 0b0001").unwrap(), vec![5, 1]);
    }

    #[test]
    fn test_parse_binary_rejects() {
        for input in ["201", "111111111", "0b", "0b2", "x1"] {
            assert!(parse_binary(input).is_err(), "accepted: {}", input);
        }
    }

    #[test]
    fn test_parse_ascii() {
        assert_eq!(parse_ascii("Hi!"), vec![72, 105, 33]);
        assert_eq!(parse_ascii(""), Vec::<u8>::new());
        assert_eq!(parse_ascii("é"), vec![0xE9]);
        // U+20AC keeps its low byte
        assert_eq!(parse_ascii("€"), vec![0xAC]);
        // U+1F600 is the surrogate pair D83D DE00
        assert_eq!(parse_ascii("😀"), vec![0x3D, 0x00]);
    }

    #[test]
    fn test_parse_dispatch() {
        assert_eq!(parse("255", Encoding::Decimal).unwrap(), vec![255]);
        assert_eq!(parse("ff", Encoding::Hexadecimal).unwrap(), vec![255]);
        assert_eq!(parse("11111111", Encoding::Binary).unwrap(), vec![255]);
        assert_eq!(parse("A", Encoding::Ascii).unwrap(), vec![65]);
    }
}
