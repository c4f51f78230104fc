//! Converter state and trigger dispatch
//!
//! [`Converter`] owns the canonical byte sequence and the last successfully
//! rendered fields. A rejected input only flags its own field; the bytes
//! and every rendered field stay as they were.

use tracing::{debug, warn};

use crate::encoding::Encoding;
use crate::error::{CodecError, Result};
use crate::parse::parse;
use crate::render::{Inspection, Rendered};

/// User action routed to a converter operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Parse the given field and re-render everything from it
    Convert(Encoding),
    /// Reset every field and pane
    Clear,
    /// Produce the four-field report
    CopyAll,
    /// Produce the C array literal
    CopyLiteral,
}

impl Trigger {
    /// Convert from trigger names
    ///
    /// - "dec", "hex", "bin", "ascii" (and long names) → Convert
    /// - "clear", "reset" → Clear
    /// - "copy", "copy-all" → CopyAll
    /// - "literal", "copy-literal" → CopyLiteral
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(encoding) = Encoding::from_str(s) {
            return Some(Self::Convert(encoding));
        }
        match s.trim().to_lowercase().as_str() {
            "clear" | "reset" => Some(Self::Clear),
            "copy" | "copy-all" => Some(Self::CopyAll),
            "literal" | "copy-literal" => Some(Self::CopyLiteral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Convert(encoding) => encoding.short_name(),
            Self::Clear => "clear",
            Self::CopyAll => "copy",
            Self::CopyLiteral => "literal",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a dispatched trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted {
        encoding: Encoding,
        byte_count: usize,
    },
    Rejected(CodecError),
    Cleared,
    /// Copied text, `None` when there was nothing to copy
    Copied(Option<String>),
}

/// Converter state owned by the calling context
#[derive(Debug, Clone, Default)]
pub struct Converter {
    bytes: Vec<u8>,
    rendered: Rendered,
    flagged: Option<Encoding>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical byte sequence from the last successful conversion
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    /// Field flagged by the last rejected conversion
    pub fn flagged(&self) -> Option<Encoding> {
        self.flagged
    }

    /// Structured views of the current byte sequence
    pub fn inspect(&self) -> Inspection {
        Inspection::from_bytes(&self.bytes)
    }

    /// Parse `text` as `encoding` and re-render every field from it
    ///
    /// Input that yields no bytes is rejected like a malformed token.
    pub fn convert(&mut self, encoding: Encoding, text: &str) -> Result<&Rendered> {
        self.flagged = None;

        let bytes = match parse(text, encoding) {
            Ok(bytes) if bytes.is_empty() => return Err(self.reject(CodecError::empty(encoding))),
            Ok(bytes) => bytes,
            Err(e) => return Err(self.reject(e)),
        };

        self.rendered = Rendered::from_bytes(&bytes);
        self.bytes = bytes;
        debug!(
            "Converted {} input into {} bytes",
            encoding,
            self.bytes.len()
        );
        Ok(&self.rendered)
    }

    fn reject(&mut self, err: CodecError) -> CodecError {
        warn!("Rejected {} input: {}", err.encoding(), err);
        self.flagged = Some(err.encoding());
        err
    }

    /// Reset bytes, flags and every rendered field
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.rendered = Rendered::cleared();
        self.flagged = None;
        debug!("Converter cleared");
    }

    /// Four-field report of the rendered text
    pub fn copy_all(&self) -> String {
        self.rendered.copy_all_report()
    }

    /// Rendered C array literal, `None` when blank
    pub fn copy_literal(&self) -> Option<String> {
        let literal = &self.rendered.literal;
        if literal.trim().is_empty() {
            None
        } else {
            Some(literal.clone())
        }
    }

    /// Route a trigger to its operation
    ///
    /// `input` is only read by [`Trigger::Convert`].
    pub fn dispatch(&mut self, trigger: Trigger, input: &str) -> Outcome {
        match trigger {
            Trigger::Convert(encoding) => match self.convert(encoding, input) {
                Ok(_) => Outcome::Converted {
                    encoding,
                    byte_count: self.bytes.len(),
                },
                Err(e) => Outcome::Rejected(e),
            },
            Trigger::Clear => {
                self.clear();
                Outcome::Cleared
            },
            Trigger::CopyAll => Outcome::Copied(Some(self.copy_all())),
            Trigger::CopyLiteral => Outcome::Copied(self.copy_literal()),
        }
    }
}
