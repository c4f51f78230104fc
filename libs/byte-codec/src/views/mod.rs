//! Inspection views derived from a byte sequence
//!
//! Provides multi-width integer interpretation, per-byte bit layout and
//! a C source literal.
//!
//! # Design Principles
//!
//! - **Stateless**: Every view is rebuilt from the full byte sequence
//! - **Truncating**: 16/32-bit groups never read past the last complete group
//! - **Infallible**: Any byte sequence yields a view

pub mod bits;
pub mod byte_order;
pub mod integers;
pub mod literal;

pub use bits::{bit_layout, extract_bit_u8, BitRow};
pub use byte_order::ByteOrder;
pub use integers::*;
pub use literal::{source_literal, EMPTY_LITERAL};
