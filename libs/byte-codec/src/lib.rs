//! Byte Codec Library
//!
//! Converts between raw byte sequences and their textual encodings, and
//! derives inspection views from the canonical byte sequence.
//!
//! # Architecture
//!
//! This library provides:
//! - **Encodings**: Decimal, hexadecimal, binary and ASCII parse/format
//! - **Checksum**: CRC-8 with polynomial 0x07
//! - **Views**: Unsigned/signed 8/16/32-bit integers, bit layout, source literal
//! - **Converter**: Explicit state object with trigger dispatch
//!
//! Every codec function is pure. The only mutable state lives in
//! [`Converter`], which the caller owns.

pub mod checksum;
pub mod converter;
pub mod encoding;
pub mod error;
pub mod format;
pub mod parse;
pub mod render;
pub mod views;

// Re-export core types
pub use checksum::{crc8, Crc8};
pub use converter::{Converter, Outcome, Trigger};
pub use encoding::Encoding;
pub use error::{CodecError, Result};
pub use format::format;
pub use parse::{parse, tokenize};
pub use render::{Inspection, Pane, Rendered};
pub use views::{
    bit_layout, signed_view, source_literal, unsigned_view, BitRow, ByteOrder, SignedView,
    UnsignedView, WordGroup, EMPTY_LITERAL,
};
