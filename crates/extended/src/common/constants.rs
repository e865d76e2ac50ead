//! Bit-Level Constants.
//!
//! Masks and shifts for the x87 64-bit explicit mantissa and the binary64 encoding.
//! The x87 mantissa carries its integer bit explicitly at bit 63; bits 62 and 63
//! together select the NaN/infinity class when the exponent is all ones.

/// Explicit integer bit of the x87 mantissa (bit 63).
pub const EXTENDED_INTEGER_BIT: u64 = 1 << 63;

/// Fraction bits of the x87 mantissa below the integer bit (bits 62..0).
pub const EXTENDED_FRACTION_MASK: u64 = EXTENDED_INTEGER_BIT - 1;

/// Shift that brings mantissa bits 63 and 62 down to bits 1 and 0.
pub const EXTENDED_CLASS_SHIFT: u32 = 62;

/// Payload bits of the x87 mantissa below the class bits (bits 61..0).
pub const EXTENDED_PAYLOAD_MASK: u64 = (1 << EXTENDED_CLASS_SHIFT) - 1;

/// Canonical quiet NaN for IEEE 754 double-precision (positive, quiet, zero payload).
pub const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Widest layout the codec can hold in a single machine word.
pub const MAX_FORMAT_BITS: u32 = u128::BITS;

/// Widest exponent field representable in [`FloatFields`](crate::codec::FloatFields).
pub const MAX_EXPONENT_BITS: u32 = u32::BITS;
