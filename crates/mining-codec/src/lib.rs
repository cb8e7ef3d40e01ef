//! Byte-level encoding primitives for Bitcoin mining protocols.
//!
//! This crate provides pure Rust implementations of:
//! - Fixed-width little- and big-endian integer packing
//! - CompactSize integers and length-prefixed strings
//! - Script number pushes (BIP34 heights)
//! - Digest hex parsing and byte/word reversal between display and internal order
//! - Compact "bits" target expansion
//! - SHA256 and double SHA256
//!
//! Every function is pure. Fallible decoders return [`CodecError`] and emit a
//! `tracing` event describing the rejected input.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bytes;
pub mod difficulty;
pub mod digest;
pub mod error;
pub mod hash;
pub mod pack;
pub mod script;
pub mod varint;

pub use bytes::{reverse_byte_order, reverse_bytes};
pub use difficulty::{
    decode_compact, decode_compact_hex, decode_compact_u32, hash_meets_target, target_to_bytes,
};
pub use digest::{digest_to_display_hex, uint256_from_hex};
pub use error::{CodecError, Result};
pub use hash::{double_sha256, sha256};
pub use pack::{
    pack_i16_be, pack_i16_le, pack_i32_be, pack_i32_le, pack_i64_be, pack_i64_le, pack_u16_be,
    pack_u16_le, pack_u32_be, pack_u32_le, pack_u64_be, pack_u64_le,
};
pub use script::serialize_number;
pub use varint::{compact_size, compact_size_len, var_bytes, var_string, write_compact_size};

pub use num_bigint::BigUint;
