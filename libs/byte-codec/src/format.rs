//! Byte sequence to text formatting
//!
//! The inverse of [`crate::parse`]: decimal, hexadecimal and binary output is
//! space-joined, ASCII output is one character per byte.

use std::fmt::Write;

use crate::encoding::Encoding;

/// Format bytes as space-joined decimal values
/// Example: [0, 16, 255] -> "0 16 255"
pub fn format_decimal(bytes: &[u8]) -> String {
    let mut buffer = itoa::Buffer::new();
    let mut result = String::with_capacity(bytes.len() * 4);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(buffer.format(*byte));
    }
    result
}

/// Format bytes as space-joined 2-digit uppercase hex
/// Example: [0x0A, 0xFF] -> "0A FF"
pub fn format_hex(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        // Writing to String buffer is infallible
        let _ = write!(&mut result, "{:02X}", byte);
    }
    result
}

/// Format bytes as space-joined 8-digit binary
/// Example: [5] -> "00000101"
pub fn format_binary(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 9);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let _ = write!(&mut result, "{:08b}", byte);
    }
    result
}

/// Format bytes as text, printable ASCII (32..=126) only
///
/// Every other byte renders as `.`.
pub fn format_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
        .collect()
}

/// Format bytes in the given encoding
pub fn format(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Decimal => format_decimal(bytes),
        Encoding::Hexadecimal => format_hex(bytes),
        Encoding::Binary => format_binary(bytes),
        Encoding::Ascii => format_ascii(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(&[0, 16, 255]), "0 16 255");
        assert_eq!(format_decimal(&[]), "");
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x0A, 0xFF, 0x00]), "0A FF 00");
        assert_eq!(format_hex(&[]), "");
    }

    #[test]
    fn test_format_binary() {
        assert_eq!(format_binary(&[5, 255]), "00000101 11111111");
        assert_eq!(format_binary(&[0]), "00000000");
    }

    #[test]
    fn test_format_ascii() {
        assert_eq!(format_ascii(b"Hi!"), "Hi!");
        assert_eq!(format_ascii(&[31, 32, 126, 127, 0xE9]), ". ~..");
    }

    #[test]
    fn test_format_dispatch() {
        let bytes = [72, 105];
        assert_eq!(format(&bytes, Encoding::Decimal), "72 105");
        assert_eq!(format(&bytes, Encoding::Hexadecimal), "48 69");
        assert_eq!(format(&bytes, Encoding::Binary), "01001000 01101001");
        assert_eq!(format(&bytes, Encoding::Ascii), "Hi");
    }
}
