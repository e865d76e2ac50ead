//! Value type for one 80-bit extended-precision number.
//!
//! [`F80`] keeps the 10-byte little-endian memory image and exposes its fields,
//! classification and conversion to `f64`.

use core::fmt;

use crate::codec::{FloatFields, decompose, recompose, split_word};
use crate::common::{ConversionError, Result};
use crate::config::ByteOrder;
use crate::format::EXTENDED;

use super::{Classification, Conversion, classify, narrow};

/// Byte length of an extended-precision value in memory.
const F80_BYTES: usize = EXTENDED.byte_count();

/// An 80-bit x87 extended-precision value, stored as its little-endian memory image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct F80([u8; F80_BYTES]);

impl F80 {
    // ---- constants ----

    /// +0.0: all bits clear.
    pub const ZERO: Self = Self::from_bits(0);

    /// -0.0: sign bit only.
    pub const NEG_ZERO: Self = Self::from_bits(0x8000_0000_0000_0000_0000);

    /// 1.0: `e=0x3FFF`, integer bit set, zero fraction.
    pub const ONE: Self = Self::from_bits(0x3FFF_8000_0000_0000_0000);

    /// +Infinity: `e=0x7FFF`, `m=0x8000_0000_0000_0000`.
    pub const INFINITY: Self = Self::from_bits(0x7FFF_8000_0000_0000_0000);

    /// -Infinity: `s=1`, `e=0x7FFF`, `m=0x8000_0000_0000_0000`.
    pub const NEG_INFINITY: Self = Self::from_bits(0xFFFF_8000_0000_0000_0000);

    /// Real indefinite, the default NaN produced by invalid x87 operations:
    /// `s=1`, `e=0x7FFF`, `m=0xC000_0000_0000_0000`.
    pub const INDEFINITE: Self = Self::from_bits(0xFFFF_C000_0000_0000_0000);

    /// Creates a value from its raw bit pattern. Bits above bit 79 are ignored.
    pub const fn from_bits(bits: u128) -> Self {
        let word = bits.to_le_bytes();
        let mut bytes = [0u8; F80_BYTES];
        let mut i = 0;
        while i < F80_BYTES {
            bytes[i] = word[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the raw 80-bit pattern.
    pub const fn to_bits(self) -> u128 {
        let mut word = [0u8; 16];
        let mut i = 0;
        while i < F80_BYTES {
            word[i] = self.0[i];
            i += 1;
        }
        u128::from_le_bytes(word)
    }

    /// Creates a value from its little-endian memory image.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; F80_BYTES]) -> Self {
        Self(bytes)
    }

    /// Creates a value from a big-endian image.
    pub const fn from_be_bytes(bytes: [u8; F80_BYTES]) -> Self {
        Self(reversed(bytes))
    }

    /// Returns the little-endian memory image.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; F80_BYTES] {
        self.0
    }

    /// Returns the big-endian image.
    pub const fn to_be_bytes(self) -> [u8; F80_BYTES] {
        reversed(self.0)
    }

    /// Reads a value from a slice in the given byte order.
    ///
    /// # Errors
    ///
    /// [`ConversionError::InvalidLength`] if `bytes` is not 10 bytes long.
    pub fn from_slice(bytes: &[u8], byte_order: ByteOrder) -> Result<Self> {
        Self::from_fields(decompose(bytes, &EXTENDED, byte_order)?)
    }

    /// Packs sign, exponent and mantissa fields into a value.
    ///
    /// # Errors
    ///
    /// [`ConversionError::FieldOverflow`] if the exponent exceeds 15 bits or the
    /// mantissa exceeds 64 bits.
    pub fn from_fields(fields: FloatFields) -> Result<Self> {
        let bytes = recompose(fields, &EXTENDED, ByteOrder::Little)?;
        let bytes: [u8; F80_BYTES] =
            bytes
                .try_into()
                .map_err(|bytes: Vec<u8>| ConversionError::InvalidLength {
                    expected: F80_BYTES,
                    actual: bytes.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Splits the value into sign, biased exponent and mantissa.
    pub const fn fields(self) -> FloatFields {
        split_word(self.to_bits(), &EXTENDED)
    }

    /// Returns true if the sign bit is set (including -0.0 and NaNs).
    pub const fn is_sign_negative(self) -> bool {
        self.fields().sign
    }

    /// Returns the encoding class of the value.
    pub const fn classify(self) -> Classification {
        classify(self.fields())
    }

    /// Converts to `f64`, reporting discarded mantissa bits.
    ///
    /// # Errors
    ///
    /// See [`extended_precision_to_double`](super::extended_precision_to_double).
    pub fn to_f64(self) -> Result<Conversion> {
        narrow(self.fields(), true)
    }
}

const fn reversed(bytes: [u8; F80_BYTES]) -> [u8; F80_BYTES] {
    let mut out = [0u8; F80_BYTES];
    let mut i = 0;
    while i < F80_BYTES {
        out[i] = bytes[F80_BYTES - 1 - i];
        i += 1;
    }
    out
}

impl From<[u8; F80_BYTES]> for F80 {
    fn from(bytes: [u8; F80_BYTES]) -> Self {
        Self::from_le_bytes(bytes)
    }
}

impl TryFrom<F80> for f64 {
    type Error = ConversionError;

    fn try_from(value: F80) -> Result<Self> {
        value.to_f64().map(|conversion| conversion.value)
    }
}

impl fmt::Display for F80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FloatFields {
            sign,
            exponent,
            mantissa,
        } = self.fields();
        write!(
            f,
            "F80(sign={}, exp={:#06x}, mant={:#018x}, {})",
            u8::from(sign),
            exponent,
            mantissa,
            self.classify()
        )
    }
}
