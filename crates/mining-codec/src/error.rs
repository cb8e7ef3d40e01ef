//! Error type shared by the fallible decoders.

use thiserror::Error;

/// Errors returned when input fails a decoder's preconditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    Decode(hex::FromHexError),
    /// Input byte length does not fit the operation.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
    /// Compact target exponent below 3 would need a negative shift.
    #[error("compact target exponent {0} is below 3")]
    Exponent(u8),
}

pub type Result<T> = core::result::Result<T, CodecError>;

/// Hex-decode `input`, logging and wrapping any failure.
pub(crate) fn decode_hex(input: &str) -> Result<alloc::vec::Vec<u8>> {
    hex::decode(input).map_err(|err| {
        tracing::warn!(input_len = input.len(), error = %err, "rejecting malformed hex");
        CodecError::Decode(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_decode_hex_error() {
        let err = decode_hex("zz").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
        assert!(err.to_string().starts_with("invalid hex"));
    }

    #[test]
    fn test_length_message() {
        let err = CodecError::Length { expected: 32, actual: 31 };
        assert_eq!(err.to_string(), "invalid length: expected 32 bytes, got 31");
    }
}
