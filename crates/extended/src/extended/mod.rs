//! x87 extended-precision to binary64 conversion.
//!
//! This module narrows 80-bit extended values to `f64`. The conversion:
//! 1. **Decodes** the 10-byte buffer into fields with the [`codec`](crate::codec).
//! 2. **Classifies** the encoding (see [`classify`]) and resolves special values.
//! 3. **Re-biases** the exponent from 16383 to 1023, rejecting values outside the
//!    binary64 exponent range instead of flushing them to zero or infinity.
//! 4. **Truncates** the 63-bit fraction to 52 bits (round toward zero), reporting
//!    discarded bits through [`Conversion::precision_lost`].
//! 5. **Reassembles** the binary64 fields and reinterprets them as `f64`.
//!
//! Denormal, pseudo-denormal and unnormal inputs fail with
//! [`ConversionError::Unsupported`]; the x87 indefinite and quiet-NaN encodings fail
//! with [`ConversionError::Unrepresentable`]. Other NaN encodings become the
//! canonical quiet NaN.

/// Encoding classes of the 80-bit format.
pub mod classification;

/// The `F80` value type.
pub mod f80;

pub use classification::{Classification, classify};
pub use f80::F80;

use tracing::{trace, warn};

use crate::codec::{FloatFields, bitmask, decompose, recompose};
use crate::common::constants::{CANONICAL_NAN_F64, EXTENDED_FRACTION_MASK};
use crate::common::{ConversionError, Result};
use crate::config::{ByteOrder, ConversionConfig};
use crate::format::{DOUBLE, EXTENDED};

/// Low fraction bits dropped when narrowing (64 - 52 - 1 explicit integer bit).
pub const MANTISSA_OFFSET: u32 = EXTENDED.mantissa_bits - DOUBLE.mantissa_bits - 1;

/// A successful conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    /// The converted value.
    pub value: f64,
    /// True if non-zero mantissa bits were discarded. `value` is then the
    /// input truncated toward zero.
    pub precision_lost: bool,
}

impl Conversion {
    const fn exact(value: f64) -> Self {
        Self {
            value,
            precision_lost: false,
        }
    }
}

/// Converts a 10-byte extended-precision buffer to `f64`.
///
/// Emits a `tracing` WARN event when mantissa bits are discarded; use
/// [`convert_with`] to silence it.
///
/// # Arguments
///
/// * `bytes` - The 10-byte memory image of the extended value.
/// * `byte_order` - Byte order of `bytes` (x87 memory is little-endian).
///
/// # Returns
///
/// The converted value along with the precision-loss flag.
///
/// # Errors
///
/// * [`ConversionError::InvalidLength`] - `bytes` is not 10 bytes long.
/// * [`ConversionError::Unsupported`] - denormal or pseudo-denormal input, or an
///   unnormal whose exponent is in range.
/// * [`ConversionError::ExponentTooSmall`] / [`ConversionError::ExponentTooLarge`] -
///   the exponent is outside the binary64 range.
/// * [`ConversionError::Unrepresentable`] - indefinite or quiet-NaN input.
pub fn extended_precision_to_double(bytes: &[u8], byte_order: ByteOrder) -> Result<Conversion> {
    let config = ConversionConfig::default().with_byte_order(byte_order);
    convert_with(bytes, config)
}

/// Converts a 10-byte extended-precision buffer using explicit options.
///
/// # Errors
///
/// Same as [`extended_precision_to_double`].
pub fn convert_with(bytes: &[u8], config: ConversionConfig) -> Result<Conversion> {
    let fields = deconstruct_extended_precision(bytes, config.byte_order)?;
    narrow(fields, config.warn_on_precision_loss)
}

/// Converts a 10-byte extended-precision buffer to `f64`, dropping the
/// precision-loss flag.
///
/// # Errors
///
/// Same as [`extended_precision_to_double`].
pub fn double_from_extended_precision_bytes(bytes: &[u8], byte_order: ByteOrder) -> Result<f64> {
    extended_precision_to_double(bytes, byte_order).map(|conversion| conversion.value)
}

/// Splits a 10-byte extended-precision buffer into its fields.
///
/// # Errors
///
/// [`ConversionError::InvalidLength`] if `bytes` is not 10 bytes long.
pub fn deconstruct_extended_precision(bytes: &[u8], byte_order: ByteOrder) -> Result<FloatFields> {
    decompose(bytes, &EXTENDED, byte_order)
}

/// Narrows extended fields to binary64.
///
/// The exponent range is checked before an unnormal is rejected, so an unnormal
/// outside the binary64 range reports the range error.
pub(crate) fn narrow(fields: FloatFields, warn_on_loss: bool) -> Result<Conversion> {
    let class = classify(fields);
    trace!(
        %class,
        sign = fields.sign,
        exponent = fields.exponent,
        mantissa = fields.mantissa as u64,
        "classified extended value"
    );

    match class {
        Classification::Zero => Ok(Conversion::exact(signed(0.0, fields.sign))),
        Classification::PseudoInfinity | Classification::Infinity => {
            Ok(Conversion::exact(signed(f64::INFINITY, fields.sign)))
        }
        Classification::PseudoNan | Classification::Nan => {
            Ok(Conversion::exact(f64::from_bits(CANONICAL_NAN_F64)))
        }
        Classification::Denormal | Classification::PseudoDenormal => {
            Err(ConversionError::Unsupported(class))
        }
        Classification::Unnormal => {
            let _ = rebias(fields.exponent)?;
            Err(ConversionError::Unsupported(class))
        }
        Classification::Indefinite | Classification::QuietNan => {
            Err(ConversionError::Unrepresentable(class))
        }
        Classification::Normal => narrow_normal(fields, warn_on_loss),
    }
}

const fn signed(magnitude: f64, negative: bool) -> f64 {
    if negative { -magnitude } else { magnitude }
}

/// Maps an extended exponent field to the binary64 exponent field.
///
/// # Errors
///
/// [`ConversionError::ExponentTooSmall`] below field 0,
/// [`ConversionError::ExponentTooLarge`] at or above the all-ones field.
const fn rebias(field: u32) -> Result<u32> {
    let exponent = field as i32 - EXTENDED.bias;
    let biased = exponent + DOUBLE.bias;
    if biased < 0 {
        return Err(ConversionError::ExponentTooSmall { exponent });
    }
    // The all-ones exponent encodes infinity/NaN in binary64.
    if biased >= DOUBLE.exponent_max() as i32 {
        return Err(ConversionError::ExponentTooLarge { exponent });
    }
    Ok(biased as u32)
}

/// Re-biases and truncates a normal extended value.
///
/// An unbiased exponent of exactly -1023 maps to binary64 exponent field 0 and is
/// written through as is. `f64` reads that pattern as a subnormal: for a stored
/// 52-bit fraction `m` the result is `m * 2^-1074` instead of
/// `(2^52 + m) * 2^-1075`. The integer bit is dropped and the value comes out
/// mis-scaled without `precision_lost` being set.
fn narrow_normal(fields: FloatFields, warn_on_loss: bool) -> Result<Conversion> {
    let biased = rebias(fields.exponent)?;

    let fraction = fields.mantissa & u128::from(EXTENDED_FRACTION_MASK);
    let discarded = fraction & bitmask(MANTISSA_OFFSET);
    let precision_lost = discarded != 0;
    if precision_lost && warn_on_loss {
        warn!(
            exponent = fields.exponent,
            discarded = discarded as u64,
            "losing precision during conversion to f64"
        );
    }

    let double = FloatFields::new(fields.sign, biased, fraction >> MANTISSA_OFFSET);
    let bytes: [u8; 8] = recompose(double, &DOUBLE, ByteOrder::Little)?
        .try_into()
        .map_err(|bytes: Vec<u8>| ConversionError::InvalidLength {
            expected: DOUBLE.byte_count(),
            actual: bytes.len(),
        })?;

    Ok(Conversion {
        value: f64::from_le_bytes(bytes),
        precision_lost,
    })
}
