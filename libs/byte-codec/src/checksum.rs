//! CRC-8 checksum
//!
//! Polynomial 0x07, initial register 0x00, no input/output reflection and
//! no final XOR (the SMBus PEC variant).

/// CRC-8 generator polynomial
pub const CRC8_POLY: u8 = 0x07;

/// CRC-8 initial register value
pub const CRC8_INIT: u8 = 0x00;

/// Incremental CRC-8 calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc8 {
    register: u8,
}

impl Crc8 {
    pub fn new() -> Self {
        Self {
            register: CRC8_INIT,
        }
    }

    /// Feed one byte into the register
    pub fn update_byte(&mut self, byte: u8) {
        let mut crc = self.register ^ byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ CRC8_POLY;
            } else {
                crc <<= 1;
            }
        }
        self.register = crc;
    }

    /// Feed a byte slice into the register
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.update_byte(byte);
        }
    }

    /// Current checksum value
    pub fn value(&self) -> u8 {
        self.register
    }
}

impl Default for Crc8 {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate the CRC-8 checksum of a byte slice
///
/// Defined for empty input (returns 0).
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = Crc8::new();
    crc.update(data);
    crc.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc8_reference_vectors() {
        assert_eq!(crc8(&[]), 0x00);
        assert_eq!(crc8(&[0x00]), 0x00);
        assert_eq!(crc8(&[0x01]), 0x07);
        assert_eq!(crc8(&[0xFF]), 0xF3);
        // Standard check value for CRC-8/SMBUS
        assert_eq!(crc8(b"123456789"), 0xF4);
        assert_eq!(crc8(&[0xDE, 0xAD, 0xBE, 0xEF]), 0xCA);
        assert_eq!(crc8(b"Hello"), 0xF6);
    }

    #[test]
    fn test_crc8_incremental_matches_oneshot() {
        let data = b"123456789";
        let mut crc = Crc8::default();
        crc.update(&data[..4]);
        crc.update(&data[4..]);
        assert_eq!(crc.value(), crc8(data));
    }

    #[test]
    fn test_crc8_appended_checksum_yields_zero() {
        let mut frame = b"Hello".to_vec();
        frame.push(crc8(&frame));
        assert_eq!(crc8(&frame), 0);
    }
}
