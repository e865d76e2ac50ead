//! Conversion error definitions.
//!
//! This module defines every way a decode or conversion can fail. It provides:
//! 1. **Error Representation:** [`ConversionError`], one variant per failure.
//! 2. **Taxonomy:** [`ErrorKind`], grouping variants into the categories callers branch on.
//!
//! Precision loss is deliberately absent: narrowing the mantissa is reported through
//! [`Conversion::precision_lost`](crate::extended::Conversion::precision_lost), not as an error.

use std::fmt;

use thiserror::Error;

use crate::extended::Classification;

/// Result type used throughout the crate.
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;

/// Broad category of a [`ConversionError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input buffer does not match the byte count of the format.
    InvalidLength,
    /// The encoding is legal but intentionally not handled (denormals, unnormals).
    Unsupported,
    /// The value has no faithful binary64 representation.
    OutOfRange,
    /// A caller-supplied field, format or option is malformed.
    InvalidArgument,
}

/// A packed field of a floating-point layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The biased exponent field.
    Exponent,
    /// The mantissa (significand) field.
    Mantissa,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exponent => f.write_str("exponent"),
            Self::Mantissa => f.write_str("mantissa"),
        }
    }
}

/// Errors raised while decoding or converting a floating-point buffer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input buffer length differs from the byte count of the format.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Byte count required by the format.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },

    /// Encoding class that is deliberately not implemented.
    #[error("{0} not implemented")]
    Unsupported(Classification),

    /// Unbiased exponent lies below the binary64 exponent range.
    #[error("exponent {exponent} too small to convert to f64")]
    ExponentTooSmall {
        /// Unbiased exponent of the extended value.
        exponent: i32,
    },

    /// Unbiased exponent would land in the binary64 infinity/NaN encoding space.
    #[error("exponent {exponent} too large to convert to f64")]
    ExponentTooLarge {
        /// Unbiased exponent of the extended value.
        exponent: i32,
    },

    /// NaN-space encoding whose meaning binary64 cannot carry.
    #[error("{0} not supported by f64")]
    Unrepresentable(Classification),

    /// A field passed for packing does not fit its declared width.
    #[error("{field} {value:#x} does not fit in {bits} bits")]
    FieldOverflow {
        /// Which field overflowed.
        field: Field,
        /// The offending value.
        value: u128,
        /// Declared width of the field.
        bits: u32,
    },

    /// Format layout is wider than the codec can hold.
    #[error("format of {bits} bits exceeds the supported width")]
    FormatTooWide {
        /// Total bit count of the offending layout (or its exponent field).
        bits: u32,
    },

    /// Byte order name other than `little` or `big`.
    #[error("unknown byte order `{0}`, expected `little` or `big`")]
    UnknownByteOrder(String),
}

impl ConversionError {
    /// Returns the taxonomy category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::Unsupported(_) => ErrorKind::Unsupported,
            Self::ExponentTooSmall { .. }
            | Self::ExponentTooLarge { .. }
            | Self::Unrepresentable(_) => ErrorKind::OutOfRange,
            Self::FieldOverflow { .. } | Self::FormatTooWide { .. } | Self::UnknownByteOrder(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
