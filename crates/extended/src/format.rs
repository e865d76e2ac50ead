//! Floating-point format descriptors.
//!
//! A [`FloatFormat`] names the field widths and exponent bias of a binary
//! floating-point layout. The codec only needs the widths; the bias is used by
//! the decoder when re-biasing exponents between formats.
//!
//! | Format     | Exponent | Mantissa | Bias  | Bytes |
//! |------------|----------|----------|-------|-------|
//! | `DOUBLE`   | 11       | 52       | 1023  | 8     |
//! | `EXTENDED` | 15       | 64       | 16383 | 10    |
//!
//! The extended mantissa includes the explicit integer bit; binary64 keeps it implicit.

use crate::codec::bitmask;

/// Layout of a sign/exponent/mantissa floating-point encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatFormat {
    /// Width of the biased exponent field in bits.
    pub exponent_bits: u32,
    /// Width of the mantissa field in bits.
    pub mantissa_bits: u32,
    /// Value subtracted from the stored exponent to get the true exponent.
    pub bias: i32,
}

/// IEEE 754 binary64.
pub const DOUBLE: FloatFormat = FloatFormat::new(11, 52, 1023);

/// x87 80-bit extended precision (explicit integer bit).
pub const EXTENDED: FloatFormat = FloatFormat::new(15, 64, 16383);

impl FloatFormat {
    /// Creates a format descriptor.
    pub const fn new(exponent_bits: u32, mantissa_bits: u32, bias: i32) -> Self {
        Self {
            exponent_bits,
            mantissa_bits,
            bias,
        }
    }

    /// Total encoded width: sign bit plus both fields.
    #[inline]
    pub const fn total_bits(&self) -> u32 {
        1 + self.exponent_bits + self.mantissa_bits
    }

    /// Number of bytes needed to hold one encoded value.
    #[inline]
    pub const fn byte_count(&self) -> usize {
        self.total_bits().div_ceil(8) as usize
    }

    /// The all-ones exponent reserved for infinities and NaNs.
    #[inline]
    pub const fn exponent_max(&self) -> u32 {
        bitmask(self.exponent_bits) as u32
    }

    /// Mask covering the mantissa field.
    #[inline]
    pub const fn mantissa_mask(&self) -> u128 {
        bitmask(self.mantissa_bits)
    }

    /// Bit position of the sign bit.
    #[inline]
    pub const fn sign_shift(&self) -> u32 {
        self.exponent_bits + self.mantissa_bits
    }
}
