//! Byte and word reversal for converting between display and internal order.

use alloc::vec::Vec;
use crate::error::{CodecError, Result};

/// Return a reversed copy of `bytes`.
///
/// Bitcoin displays hashes in the reverse of their internal byte order.
#[inline]
pub fn reverse_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Swap every 4-byte word of a 32-byte value, then reverse the whole value.
///
/// Each word is read big-endian and written back little-endian. This is the
/// conversion stratum-style `prevhash` fields need; applying it twice is the
/// identity.
pub fn reverse_byte_order(bytes: &[u8]) -> Result<[u8; 32]> {
    if bytes.len() != 32 {
        tracing::warn!(len = bytes.len(), "word reversal needs exactly 32 bytes");
        return Err(CodecError::Length {
            expected: 32,
            actual: bytes.len(),
        });
    }

    let mut swapped = [0u8; 32];
    for (out, word) in swapped.chunks_exact_mut(4).zip(bytes.chunks_exact(4)) {
        let value = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        out.copy_from_slice(&value.to_le_bytes());
    }
    swapped.reverse();
    Ok(swapped)
}
