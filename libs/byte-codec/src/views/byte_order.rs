//! Byte order for multi-width integer interpretation
//!
//! Every 16/32-bit group is reported in both orders.

/// Byte order within a 16/32-bit group
///
/// For bytes `[0x12, 0x34, 0x56, 0x78]`:
/// - `BigEndian`: 0x12345678
/// - `LittleEndian`: 0x78563412
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// First byte is the most significant
    BigEndian,

    /// First byte is the least significant
    LittleEndian,
}

impl ByteOrder {
    /// Label used in rendered group lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::BigEndian => "BE",
            Self::LittleEndian => "LE",
        }
    }
}
