//! Bit-level layout of a byte sequence
//!
//! Each byte is shown most-significant bit first (bit 7 down to bit 0).

use serde::Serialize;

/// Extract single bit from u8 value
#[inline]
pub fn extract_bit_u8(value: u8, bit_index: u8) -> bool {
    debug_assert!(bit_index < 8, "Bit index out of range: {}", bit_index);
    (value & (1 << bit_index)) != 0
}

/// One byte of the bit layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitRow {
    /// Offset of the byte in the sequence
    pub index: usize,
    /// Eight `0`/`1` characters, bit 7 first
    pub bits: String,
}

impl BitRow {
    pub fn new(index: usize, value: u8) -> Self {
        let bits = (0..8u8)
            .rev()
            .map(|bit| if extract_bit_u8(value, bit) { '1' } else { '0' })
            .collect();
        Self { index, bits }
    }
}

/// Build the bit layout for every byte
pub fn bit_layout(bytes: &[u8]) -> Vec<BitRow> {
    bytes
        .iter()
        .enumerate()
        .map(|(index, &value)| BitRow::new(index, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bit_u8() {
        let value = 0b1010_1100u8;
        assert!(!extract_bit_u8(value, 0));
        assert!(extract_bit_u8(value, 2));
        assert!(extract_bit_u8(value, 7));
    }

    #[test]
    fn test_bit_row_msb_first() {
        assert_eq!(BitRow::new(0, 0x80).bits, "10000000");
        assert_eq!(BitRow::new(0, 0x01).bits, "00000001");
        assert_eq!(BitRow::new(0, 0xA5).bits, format!("{:08b}", 0xA5));
    }

    #[test]
    fn test_bit_layout() {
        let rows = bit_layout(&[0, 255, 16]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].bits, "11111111");
        assert_eq!(rows[2].bits, "00010000");
        assert!(bit_layout(&[]).is_empty());
    }
}
