//! Fixed-width integer packing.
//!
//! Each function returns exactly `width / 8` bytes. Signed values are packed
//! from their two's-complement bit pattern.

macro_rules! pack_fns {
    ($($ty:ty, $len:literal => $le:ident, $be:ident;)*) => {
        $(
            #[doc = concat!("Pack a `", stringify!($ty), "` as ", stringify!($len), " little-endian bytes.")]
            #[inline]
            pub fn $le(n: $ty) -> [u8; $len] {
                n.to_le_bytes()
            }

            #[doc = concat!("Pack a `", stringify!($ty), "` as ", stringify!($len), " big-endian bytes.")]
            #[inline]
            pub fn $be(n: $ty) -> [u8; $len] {
                n.to_be_bytes()
            }
        )*
    };
}

pack_fns! {
    u16, 2 => pack_u16_le, pack_u16_be;
    u32, 4 => pack_u32_le, pack_u32_be;
    u64, 8 => pack_u64_le, pack_u64_be;
    i16, 2 => pack_i16_le, pack_i16_be;
    i32, 4 => pack_i32_le, pack_i32_be;
    i64, 8 => pack_i64_le, pack_i64_be;
}
