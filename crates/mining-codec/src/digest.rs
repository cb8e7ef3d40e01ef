//! 256-bit digest references between display hex and internal byte order.

use alloc::string::String;
use crate::error::{decode_hex, CodecError, Result};

/// Parse a display-order hex digest into its 32-byte internal form.
///
/// The decoded bytes are copied left-aligned into a zeroed 32-byte buffer
/// which is then reversed, so short input ends up zero-padded at the high
/// end. More than 32 decoded bytes is an error.
pub fn uint256_from_hex(hex_str: &str) -> Result<[u8; 32]> {
    let decoded = decode_hex(hex_str)?;
    if decoded.len() > 32 {
        tracing::warn!(len = decoded.len(), "digest hex decodes to more than 32 bytes");
        return Err(CodecError::Length {
            expected: 32,
            actual: decoded.len(),
        });
    }

    let mut digest = [0u8; 32];
    digest[..decoded.len()].copy_from_slice(&decoded);
    digest.reverse();
    Ok(digest)
}

/// Convert an internal-order digest to its display hex.
pub fn digest_to_display_hex(digest: &[u8; 32]) -> String {
    let mut reversed = *digest;
    reversed.reverse();
    hex::encode(reversed)
}
