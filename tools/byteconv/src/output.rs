//! Terminal and JSON output

use anyhow::{Context, Result};
use byte_codec::{crc8, Encoding, Inspection, Pane, Rendered};
use colored::*;
use serde::Serialize;

use crate::config::PaneSelection;

/// Short upper-case label of a field, as in the copy-all report
fn field_label(encoding: Encoding) -> &'static str {
    match encoding {
        Encoding::Decimal => "DEC",
        Encoding::Hexadecimal => "HEX",
        Encoding::Binary => "BIN",
        Encoding::Ascii => "ASCII",
    }
}

/// The four text fields and the checksum
pub fn fields_text(rendered: &Rendered) -> String {
    let mut out = String::new();
    for encoding in Encoding::ALL {
        out.push_str(&format!(
            "{:<6} {}\n",
            format!("{}:", field_label(encoding)).bright_cyan().bold(),
            rendered.field(encoding)
        ));
    }
    out.push_str(&format!(
        "{} {}",
        "CRC-8 (dec):".bright_cyan().bold(),
        rendered.checksum
    ));
    out
}

/// One pane with its heading
pub fn pane_text(rendered: &Rendered, pane: Pane) -> String {
    let body = rendered.pane(pane);
    let body = if body.is_empty() { "-" } else { body };
    format!("{}\n{}", format!("== {} ==", pane.title()).yellow(), body)
}

/// Fields followed by every selected pane
pub fn conversion_text(rendered: &Rendered, panes: &PaneSelection) -> String {
    let mut sections = vec![fields_text(rendered)];
    sections.extend(panes.enabled().map(|pane| pane_text(rendered, pane)));
    sections.join("\n\n")
}

/// Checksum summary for `crc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrcReport {
    pub byte_count: usize,
    pub crc8: u8,
    pub hex: String,
}

impl CrcReport {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let crc = crc8(bytes);
        Self {
            byte_count: bytes.len(),
            crc8: crc,
            hex: format!("0x{:02X}", crc),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "{} {} ({}) over {} bytes",
            "CRC-8:".bright_cyan().bold(),
            self.crc8.to_string().green(),
            self.hex,
            self.byte_count
        )
    }
}

/// JSON value of a single pane
pub fn pane_json(inspection: &Inspection, pane: Pane) -> Result<serde_json::Value> {
    let value = match pane {
        Pane::Unsigned => serde_json::to_value(&inspection.unsigned),
        Pane::Signed => serde_json::to_value(&inspection.signed),
        Pane::Bits => serde_json::to_value(&inspection.bits),
        Pane::Literal => serde_json::to_value(&inspection.literal),
    };
    value.with_context(|| format!("Failed to serialize {} pane", pane))
}

/// Pretty-printed JSON document
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON output")
}
