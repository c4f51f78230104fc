//! Multi-width integer views with byte order support
//!
//! Bytes are grouped into consecutive, non-overlapping pairs (16-bit) or
//! quads (32-bit) starting at offset 0. A trailing incomplete group is
//! dropped. Every group is reported in both byte orders.

use serde::Serialize;

use super::ByteOrder;

// ============================================================================
// Byte Array to Numeric Type Conversions
// ============================================================================

/// Convert 2 bytes to u16 with specified byte order
pub fn bytes_to_u16(bytes: &[u8; 2], order: ByteOrder) -> u16 {
    match order {
        ByteOrder::BigEndian => u16::from_be_bytes(*bytes),
        ByteOrder::LittleEndian => u16::from_le_bytes(*bytes),
    }
}

/// Convert 4 bytes to u32 with specified byte order
pub fn bytes_to_u32(bytes: &[u8; 4], order: ByteOrder) -> u32 {
    match order {
        ByteOrder::BigEndian => u32::from_be_bytes(*bytes),
        ByteOrder::LittleEndian => u32::from_le_bytes(*bytes),
    }
}

// ============================================================================
// Two's Complement Reinterpretation
// ============================================================================

/// Reinterpret an 8-bit value as signed (128..=255 → -128..=-1)
#[inline]
pub fn to_signed8(value: u8) -> i8 {
    value as i8
}

/// Reinterpret a 16-bit value as signed (32768..=65535 → -32768..=-1)
#[inline]
pub fn to_signed16(value: u16) -> i16 {
    value as i16
}

/// Reinterpret a 32-bit value as signed (2^31..=2^32-1 → -2^31..=-1)
#[inline]
pub fn to_signed32(value: u32) -> i32 {
    value as i32
}

// ============================================================================
// Grouped Views
// ============================================================================

/// One 16/32-bit group read in both byte orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordGroup<T> {
    /// Offset of the first byte
    pub start: usize,
    /// Offset of the last byte (inclusive)
    pub end: usize,
    pub little_endian: T,
    pub big_endian: T,
}

impl<T: Copy> WordGroup<T> {
    /// Value in the given byte order
    pub fn value(&self, order: ByteOrder) -> T {
        match order {
            ByteOrder::BigEndian => self.big_endian,
            ByteOrder::LittleEndian => self.little_endian,
        }
    }

    fn map<U>(self, f: impl Fn(T) -> U) -> WordGroup<U> {
        WordGroup {
            start: self.start,
            end: self.end,
            little_endian: f(self.little_endian),
            big_endian: f(self.big_endian),
        }
    }
}

/// Unsigned interpretation of a byte sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnsignedView {
    pub u8: Vec<u8>,
    pub u16: Vec<WordGroup<u16>>,
    pub u32: Vec<WordGroup<u32>>,
}

/// Signed (two's complement) interpretation of a byte sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignedView {
    pub i8: Vec<i8>,
    pub i16: Vec<WordGroup<i16>>,
    pub i32: Vec<WordGroup<i32>>,
}

/// Group bytes into consecutive pairs, dropping a trailing odd byte
pub fn group_u16(bytes: &[u8]) -> Vec<WordGroup<u16>> {
    bytes
        .chunks_exact(2)
        .enumerate()
        .map(|(i, chunk)| {
            let pair = [chunk[0], chunk[1]];
            WordGroup {
                start: i * 2,
                end: i * 2 + 1,
                little_endian: bytes_to_u16(&pair, ByteOrder::LittleEndian),
                big_endian: bytes_to_u16(&pair, ByteOrder::BigEndian),
            }
        })
        .collect()
}

/// Group bytes into consecutive quads, dropping 1-3 trailing bytes
pub fn group_u32(bytes: &[u8]) -> Vec<WordGroup<u32>> {
    bytes
        .chunks_exact(4)
        .enumerate()
        .map(|(i, chunk)| {
            let quad = [chunk[0], chunk[1], chunk[2], chunk[3]];
            WordGroup {
                start: i * 4,
                end: i * 4 + 3,
                little_endian: bytes_to_u32(&quad, ByteOrder::LittleEndian),
                big_endian: bytes_to_u32(&quad, ByteOrder::BigEndian),
            }
        })
        .collect()
}

/// Build the unsigned 8/16/32-bit view
pub fn unsigned_view(bytes: &[u8]) -> UnsignedView {
    UnsignedView {
        u8: bytes.to_vec(),
        u16: group_u16(bytes),
        u32: group_u32(bytes),
    }
}

/// Build the signed 8/16/32-bit view
pub fn signed_view(bytes: &[u8]) -> SignedView {
    SignedView {
        i8: bytes.iter().map(|&b| to_signed8(b)).collect(),
        i16: group_u16(bytes)
            .into_iter()
            .map(|g| g.map(to_signed16))
            .collect(),
        i32: group_u32(bytes)
            .into_iter()
            .map(|g| g.map(to_signed32))
            .collect(),
    }
}
