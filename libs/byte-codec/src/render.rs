//! Rendering of fields and inspection panes
//!
//! A byte sequence fans out into four text fields, a checksum field and four
//! panes. [`Inspection`] holds the structured form (used for JSON output);
//! [`Rendered`] holds the display text.

use std::fmt::Write;

use serde::Serialize;

use crate::checksum::crc8;
use crate::encoding::Encoding;
use crate::format::format;
use crate::views::{
    bit_layout, signed_view, source_literal, unsigned_view, BitRow, ByteOrder, SignedView,
    UnsignedView, WordGroup, EMPTY_LITERAL,
};

/// Placeholder for a pane section with no groups
const NONE_PLACEHOLDER: &str = "-";

// ============================================================================
// Pane selection
// ============================================================================

/// Inspection pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    Unsigned,
    Signed,
    Bits,
    Literal,
}

impl Pane {
    pub const ALL: [Pane; 4] = [Pane::Unsigned, Pane::Signed, Pane::Bits, Pane::Literal];

    /// Convert from pane names
    ///
    /// - "unsigned", "u" → Unsigned
    /// - "signed", "s" → Signed
    /// - "bits", "bit" → Bits
    /// - "literal", "c", "array" → Literal
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "unsigned" | "u" => Some(Self::Unsigned),
            "signed" | "s" => Some(Self::Signed),
            "bits" | "bit" => Some(Self::Bits),
            "literal" | "c" | "array" => Some(Self::Literal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::Signed => "signed",
            Self::Bits => "bits",
            Self::Literal => "literal",
        }
    }

    /// Get the pane heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Unsigned => "Unsigned integers",
            Self::Signed => "Signed integers",
            Self::Bits => "Bit layout",
            Self::Literal => "C array",
        }
    }
}

impl std::fmt::Display for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Structured inspection
// ============================================================================

/// Every derived view of one byte sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub bytes: Vec<u8>,
    pub decimal: String,
    pub hexadecimal: String,
    pub binary: String,
    pub ascii: String,
    /// Absent for an empty sequence
    pub crc8: Option<u8>,
    pub unsigned: UnsignedView,
    pub signed: SignedView,
    pub bits: Vec<BitRow>,
    pub literal: String,
}

impl Inspection {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            decimal: format(bytes, Encoding::Decimal),
            hexadecimal: format(bytes, Encoding::Hexadecimal),
            binary: format(bytes, Encoding::Binary),
            ascii: format(bytes, Encoding::Ascii),
            crc8: (!bytes.is_empty()).then(|| crc8(bytes)),
            unsigned: unsigned_view(bytes),
            signed: signed_view(bytes),
            bits: bit_layout(bytes),
            literal: source_literal(bytes),
        }
    }
}

// ============================================================================
// Pane text
// ============================================================================

fn join_or_placeholder(lines: Vec<String>, separator: &str) -> String {
    if lines.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        lines.join(separator)
    }
}

/// `LE:<le> BE:<be>` part of a group line
fn endian_values<T: std::fmt::Display + Copy>(group: &WordGroup<T>) -> String {
    let (le, be) = (ByteOrder::LittleEndian, ByteOrder::BigEndian);
    format!(
        "{}:{} {}:{}",
        le.label(),
        group.value(le),
        be.label(),
        group.value(be)
    )
}

fn pair_lines<T: std::fmt::Display + Copy>(groups: &[WordGroup<T>]) -> Vec<String> {
    groups
        .iter()
        .map(|g| format!("[{}/{}] {}", g.start, g.end, endian_values(g)))
        .collect()
}

fn quad_lines<T: std::fmt::Display + Copy>(groups: &[WordGroup<T>]) -> Vec<String> {
    groups
        .iter()
        .map(|g| format!("[#{}..{}] {}", g.start, g.end, endian_values(g)))
        .collect()
}

fn integer_pane(
    heading: [&str; 3],
    singles: Vec<String>,
    pairs: Vec<String>,
    quads: Vec<String>,
) -> String {
    let mut result = String::new();
    let _ = write!(
        &mut result,
        "{}:\n{}\n\n{} (LE/BE pairs):\n{}\n\n{} (LE/BE groups):\n{}",
        heading[0],
        join_or_placeholder(singles, " "),
        heading[1],
        join_or_placeholder(pairs, "\n"),
        heading[2],
        join_or_placeholder(quads, "\n"),
    );
    result
}

/// Render the unsigned pane
pub fn render_unsigned(view: &UnsignedView) -> String {
    integer_pane(
        ["uint8_t", "uint16_t", "uint32_t"],
        view.u8.iter().map(u8::to_string).collect(),
        pair_lines(&view.u16),
        quad_lines(&view.u32),
    )
}

/// Render the signed pane
pub fn render_signed(view: &SignedView) -> String {
    integer_pane(
        ["int8_t", "int16_t", "int32_t"],
        view.i8.iter().map(i8::to_string).collect(),
        pair_lines(&view.i16),
        quad_lines(&view.i32),
    )
}

/// Render the bit pane, one `Byte <i>: <bits>  (7..0)` line per byte
pub fn render_bits(rows: &[BitRow]) -> String {
    join_or_placeholder(
        rows.iter()
            .map(|row| format!("Byte {}: {}  (7..0)", row.index, row.bits))
            .collect(),
        "\n",
    )
}

// ============================================================================
// Rendered fields and panes
// ============================================================================

/// Display text of every field and pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub decimal: String,
    pub hexadecimal: String,
    pub binary: String,
    pub ascii: String,
    /// CRC-8 in decimal, empty for an empty sequence
    pub checksum: String,
    pub unsigned: String,
    pub signed: String,
    pub bits: String,
    pub literal: String,
}

impl Rendered {
    /// Cleared state: everything blank except the empty literal
    pub fn cleared() -> Self {
        Self {
            decimal: String::new(),
            hexadecimal: String::new(),
            binary: String::new(),
            ascii: String::new(),
            checksum: String::new(),
            unsigned: String::new(),
            signed: String::new(),
            bits: String::new(),
            literal: EMPTY_LITERAL.to_string(),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_inspection(&Inspection::from_bytes(bytes))
    }

    pub fn from_inspection(inspection: &Inspection) -> Self {
        Self {
            decimal: inspection.decimal.clone(),
            hexadecimal: inspection.hexadecimal.clone(),
            binary: inspection.binary.clone(),
            ascii: inspection.ascii.clone(),
            checksum: inspection
                .crc8
                .map(|crc| crc.to_string())
                .unwrap_or_default(),
            unsigned: render_unsigned(&inspection.unsigned),
            signed: render_signed(&inspection.signed),
            bits: render_bits(&inspection.bits),
            literal: inspection.literal.clone(),
        }
    }

    /// Text field for an encoding
    pub fn field(&self, encoding: Encoding) -> &str {
        match encoding {
            Encoding::Decimal => &self.decimal,
            Encoding::Hexadecimal => &self.hexadecimal,
            Encoding::Binary => &self.binary,
            Encoding::Ascii => &self.ascii,
        }
    }

    /// Text of an inspection pane
    pub fn pane(&self, pane: Pane) -> &str {
        match pane {
            Pane::Unsigned => &self.unsigned,
            Pane::Signed => &self.signed,
            Pane::Bits => &self.bits,
            Pane::Literal => &self.literal,
        }
    }

    /// Plain-text report of the four fields and the checksum
    pub fn copy_all_report(&self) -> String {
        format!(
            "DEC:\n{}\n\nHEX:\n{}\n\nBIN:\n{}\n\nASCII:\n{}\n\nCRC-8 (dec): {}",
            self.decimal, self.hexadecimal, self.binary, self.ascii, self.checksum
        )
    }
}

impl Default for Rendered {
    fn default() -> Self {
        Self::cleared()
    }
}
