//! Script number pushes, as used for the BIP34 height in a coinbase scriptSig.

use alloc::vec;
use alloc::vec::Vec;

/// Opcode base for the small-integer pushes OP_1..OP_16.
const OP_1_BASE: u8 = 0x50;

/// Encode `n` as a script number push.
///
/// 1 through 16 collapse to the single opcode `0x50 + n`. Anything else,
/// including 0, becomes a length byte followed by the little-endian value
/// bytes; low bytes are emitted while the remainder exceeds 0x7F, and the
/// remainder itself is the last byte. The output is never longer than 10 bytes.
pub fn serialize_number(n: u64) -> Vec<u8> {
    if (1..=16).contains(&n) {
        return vec![OP_1_BASE + n as u8];
    }

    let mut bytes = Vec::with_capacity(10);
    bytes.push(0); // length, patched below

    let mut n = n;
    while n > 0x7f {
        bytes.push((n & 0xff) as u8);
        n >>= 8;
    }
    bytes.push(n as u8);

    bytes[0] = (bytes.len() - 1) as u8;
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_integers() {
        assert_eq!(serialize_number(1), vec![0x51]);
        assert_eq!(serialize_number(5), vec![0x55]);
        assert_eq!(serialize_number(16), vec![0x60]);
    }

    #[test]
    fn test_zero_takes_general_path() {
        assert_eq!(serialize_number(0), vec![0x01, 0x00]);
    }

    #[test]
    fn test_general_numbers() {
        assert_eq!(serialize_number(17), vec![0x01, 0x11]);
        assert_eq!(serialize_number(127), vec![0x01, 0x7F]);

        // 0x80 shifts out to a trailing zero byte
        assert_eq!(serialize_number(128), vec![0x02, 0x80, 0x00]);
        assert_eq!(serialize_number(256), vec![0x02, 0x00, 0x01]);

        // Mainnet height 500000 = 0x07A120
        assert_eq!(serialize_number(500_000), vec![0x03, 0x20, 0xA1, 0x07]);
    }

    #[test]
    fn test_high_bit_takes_nine_value_bytes() {
        let encoded = serialize_number(1 << 63);
        assert_eq!(encoded.len(), 10);
        assert_eq!(encoded[0], 9);
        assert_eq!(&encoded[1..8], &[0x00; 7]);
        assert_eq!(encoded[8], 0x80);
        assert_eq!(encoded[9], 0x00);
    }

    #[test]
    fn test_max_length() {
        let encoded = serialize_number(u64::MAX);
        assert_eq!(encoded.len(), 10);
        assert_eq!(encoded[0], 9);
        assert_eq!(&encoded[1..9], &[0xFF; 8]);
        assert_eq!(encoded[9], 0x00);
    }
}
