//! Bit-field codec for binary floating-point layouts.
//!
//! This module converts between raw byte buffers and their sign/exponent/mantissa
//! fields for any [`FloatFormat`] of at most 128 bits. It performs the following:
//! 1. **Decomposition:** Reads the buffer as one unsigned word in the requested byte
//!    order and masks out the mantissa (low bits), exponent (next bits) and sign.
//! 2. **Recomposition:** Packs validated fields back into a word and serializes it to
//!    the format's byte count.
//!
//! The codec is purely structural: it never rounds, re-biases or interprets values.
//! For layouts whose width is not a multiple of 8, the padding bits above the sign
//! are ignored on decode and written as zero on encode.

use crate::common::constants::{MAX_EXPONENT_BITS, MAX_FORMAT_BITS};
use crate::common::{ConversionError, Field, Result};
use crate::config::ByteOrder;
use crate::format::FloatFormat;

/// Size of the scratch word the codec works in.
const WORD_BYTES: usize = (u128::BITS / 8) as usize;

/// Sign, biased exponent and mantissa of one encoded value.
///
/// Each field holds exactly the bits of its slot in the layout, with no sign
/// extension and no implicit bit added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatFields {
    /// Sign bit (`true` for negative).
    pub sign: bool,
    /// Biased exponent field.
    pub exponent: u32,
    /// Mantissa field, including an explicit integer bit if the layout has one.
    pub mantissa: u128,
}

impl FloatFields {
    /// Creates a field triple.
    pub const fn new(sign: bool, exponent: u32, mantissa: u128) -> Self {
        Self {
            sign,
            exponent,
            mantissa,
        }
    }
}

/// Returns a mask with the low `bits` bits set, saturating at 128 bits.
#[inline]
pub const fn bitmask(bits: u32) -> u128 {
    if bits >= u128::BITS {
        u128::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Splits an encoded buffer into its fields.
///
/// # Arguments
///
/// * `bytes` - Encoded value, exactly `format.byte_count()` bytes long.
/// * `format` - Layout describing the field widths.
/// * `order` - Byte order of `bytes`.
///
/// # Returns
///
/// The sign, biased exponent and mantissa fields.
///
/// # Errors
///
/// [`ConversionError::InvalidLength`] if the buffer length does not match the format,
/// [`ConversionError::FormatTooWide`] if the layout does not fit the codec.
pub fn decompose(bytes: &[u8], format: &FloatFormat, order: ByteOrder) -> Result<FloatFields> {
    check_format(format)?;
    let expected = format.byte_count();
    if bytes.len() != expected {
        return Err(ConversionError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(split_word(read_word(bytes, order), format))
}

/// Splits an already-assembled word into fields. The format must have passed
/// `check_format`.
pub(crate) const fn split_word(word: u128, format: &FloatFormat) -> FloatFields {
    FloatFields {
        sign: (word >> format.sign_shift()) & 1 == 1,
        exponent: ((word >> format.mantissa_bits) & bitmask(format.exponent_bits)) as u32,
        mantissa: word & format.mantissa_mask(),
    }
}

/// Packs fields into an encoded buffer.
///
/// # Arguments
///
/// * `fields` - Sign, biased exponent and mantissa to pack.
/// * `format` - Layout describing the field widths.
/// * `order` - Byte order of the returned buffer.
///
/// # Returns
///
/// A buffer of exactly `format.byte_count()` bytes.
///
/// # Errors
///
/// [`ConversionError::FieldOverflow`] if the exponent or mantissa is wider than its slot,
/// [`ConversionError::FormatTooWide`] if the layout does not fit the codec.
pub fn recompose(fields: FloatFields, format: &FloatFormat, order: ByteOrder) -> Result<Vec<u8>> {
    check_format(format)?;

    let exponent = u128::from(fields.exponent);
    if exponent > bitmask(format.exponent_bits) {
        return Err(ConversionError::FieldOverflow {
            field: Field::Exponent,
            value: exponent,
            bits: format.exponent_bits,
        });
    }
    if fields.mantissa > format.mantissa_mask() {
        return Err(ConversionError::FieldOverflow {
            field: Field::Mantissa,
            value: fields.mantissa,
            bits: format.mantissa_bits,
        });
    }

    let word = (u128::from(fields.sign) << format.sign_shift())
        | (exponent << format.mantissa_bits)
        | fields.mantissa;
    Ok(write_word(word, format.byte_count(), order))
}

/// Rejects layouts the 128-bit scratch word cannot hold.
const fn check_format(format: &FloatFormat) -> Result<()> {
    if format.exponent_bits > MAX_EXPONENT_BITS {
        return Err(ConversionError::FormatTooWide {
            bits: format.exponent_bits,
        });
    }
    // `exponent_bits <= 32` here, so only the mantissa width can overflow.
    let sign_and_exponent = 1 + format.exponent_bits;
    let bits = format.mantissa_bits.saturating_add(sign_and_exponent);
    if bits > MAX_FORMAT_BITS {
        return Err(ConversionError::FormatTooWide { bits });
    }
    Ok(())
}

/// Reads up to 16 bytes as one unsigned word.
fn read_word(bytes: &[u8], order: ByteOrder) -> u128 {
    let mut buf = [0u8; WORD_BYTES];
    match order {
        ByteOrder::Little => {
            buf[..bytes.len()].copy_from_slice(bytes);
            u128::from_le_bytes(buf)
        }
        ByteOrder::Big => {
            buf[WORD_BYTES - bytes.len()..].copy_from_slice(bytes);
            u128::from_be_bytes(buf)
        }
    }
}

/// Serializes the low `len` bytes of a word.
fn write_word(word: u128, len: usize, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Little => word.to_le_bytes()[..len].to_vec(),
        ByteOrder::Big => word.to_be_bytes()[WORD_BYTES - len..].to_vec(),
    }
}
