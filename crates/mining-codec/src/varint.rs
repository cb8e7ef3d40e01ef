//! CompactSize integers and length-prefixed strings.
//!
//! Only the encode direction lives here. Every value has exactly one
//! encoding: the shortest of the 1, 3, 5 or 9 byte forms that can hold it.

use alloc::vec::Vec;
use crate::pack::{pack_u16_le, pack_u32_le, pack_u64_le};

/// Encoded length of `n` in bytes (1, 3, 5 or 9).
#[inline]
pub fn compact_size_len(n: u64) -> usize {
    if n < 0xfd {
        1
    } else if n <= 0xffff {
        3
    } else if n <= 0xffff_ffff {
        5
    } else {
        9
    }
}

/// Append the CompactSize encoding of `n` to `output`.
pub fn write_compact_size(n: u64, output: &mut Vec<u8>) {
    if n < 0xfd {
        output.push(n as u8);
    } else if n <= 0xffff {
        output.push(0xfd);
        output.extend_from_slice(&pack_u16_le(n as u16));
    } else if n <= 0xffff_ffff {
        output.push(0xfe);
        output.extend_from_slice(&pack_u32_le(n as u32));
    } else {
        output.push(0xff);
        output.extend_from_slice(&pack_u64_le(n));
    }
}

/// Encode `n` as a CompactSize.
pub fn compact_size(n: u64) -> Vec<u8> {
    let mut output = Vec::with_capacity(compact_size_len(n));
    write_compact_size(n, &mut output);
    output
}

/// Length-prefixed raw bytes: `CompactSize(len) || data`.
pub fn var_bytes(data: &[u8]) -> Vec<u8> {
    let len = data.len() as u64;
    let mut output = Vec::with_capacity(compact_size_len(len) + data.len());
    write_compact_size(len, &mut output);
    output.extend_from_slice(data);
    output
}

/// Length-prefixed string. The prefix counts UTF-8 bytes, not characters.
#[inline]
pub fn var_string(s: &str) -> Vec<u8> {
    var_bytes(s.as_bytes())
}
