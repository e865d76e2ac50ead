//! x86 extended-precision (80-bit) to `f64` conversion.
//!
//! This crate reads the 10-byte memory image of an x87 extended-precision value and
//! produces the equivalent IEEE 754 binary64 value. It is organized as:
//! 1. **Format:** Named descriptors for the binary64 and x87 extended layouts.
//! 2. **Codec:** Generic sign/exponent/mantissa decomposition and reassembly of byte buffers.
//! 3. **Extended:** Classification of the 80-bit encodings and narrowing to `f64`.
//! 4. **Config:** Byte order and conversion options.
//! 5. **Common:** Error types and shared bit-level constants.
//!
//! # Examples
//!
//! ```
//! use x86_extended_precision::{ByteOrder, extended_precision_to_double};
//!
//! let bytes = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8C, 0x04, 0x40];
//! let conversion = extended_precision_to_double(&bytes, ByteOrder::Little)?;
//! assert_eq!(conversion.value, 35.0);
//! assert!(!conversion.precision_lost);
//! # Ok::<(), x86_extended_precision::ConversionError>(())
//! ```

/// Generic bit-field codec for binary floating-point layouts.
pub mod codec;
/// Error types and shared constants.
pub mod common;
/// Conversion configuration (byte order, warning behaviour).
pub mod config;
/// x87 extended-precision classification and conversion.
pub mod extended;
/// Floating-point format descriptors.
pub mod format;

pub use crate::codec::{FloatFields, decompose, recompose};
pub use crate::common::{ConversionError, ErrorKind, Result};
pub use crate::config::{ByteOrder, ConversionConfig};
pub use crate::extended::{
    Classification, Conversion, F80, classify, convert_with, deconstruct_extended_precision,
    double_from_extended_precision_bytes, extended_precision_to_double,
};
pub use crate::format::{DOUBLE, EXTENDED, FloatFormat};
