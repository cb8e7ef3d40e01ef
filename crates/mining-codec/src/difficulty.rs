//! Compact "bits" target decoding.

use num_bigint::BigUint;
use crate::error::{decode_hex, CodecError, Result};

/// Decode a 4-byte compact target into its full value.
///
/// The bits format is: [exponent (1 byte)][mantissa (3 bytes, big-endian)]
/// Target = mantissa * 256^(exponent - 3)
///
/// An exponent below 3 is rejected. The mantissa is read as a plain 24-bit
/// value; no sign bit is interpreted.
pub fn decode_compact(bits: &[u8]) -> Result<BigUint> {
    if bits.len() != 4 {
        tracing::warn!(len = bits.len(), "compact target needs exactly 4 bytes");
        return Err(CodecError::Length {
            expected: 4,
            actual: bits.len(),
        });
    }

    let exponent = bits[0];
    if exponent < 3 {
        tracing::warn!(exponent, "compact target exponent below 3");
        return Err(CodecError::Exponent(exponent));
    }

    let mantissa = u32::from_be_bytes([0, bits[1], bits[2], bits[3]]);
    let shift = 8 * (exponent as usize - 3);
    tracing::debug!(exponent, mantissa, shift, "expanding compact target");
    Ok(BigUint::from(mantissa) << shift)
}

/// Decode a compact target given as 8 hex characters, e.g. `"1d00ffff"`.
pub fn decode_compact_hex(bits: &str) -> Result<BigUint> {
    decode_compact(&decode_hex(bits)?)
}

/// Decode a compact target held as a native integer (`0x1d00ffff`).
#[inline]
pub fn decode_compact_u32(bits: u32) -> Result<BigUint> {
    decode_compact(&bits.to_be_bytes())
}

/// Render a target as a 32-byte big-endian number.
///
/// Targets wider than 256 bits do not fit and are rejected.
pub fn target_to_bytes(target: &BigUint) -> Result<[u8; 32]> {
    let be = target.to_bytes_be();
    if be.len() > 32 {
        tracing::warn!(len = be.len(), "target wider than 256 bits");
        return Err(CodecError::Length {
            expected: 32,
            actual: be.len(),
        });
    }

    let mut out = [0u8; 32];
    out[32 - be.len()..].copy_from_slice(&be);
    Ok(out)
}

/// Check if an internal-order hash meets the target.
///
/// The hash is read as a little-endian 256-bit number; it meets the target
/// when it is less than or equal to it.
#[inline]
pub fn hash_meets_target(hash: &[u8; 32], target: &BigUint) -> bool {
    BigUint::from_bytes_le(hash) <= *target
}
