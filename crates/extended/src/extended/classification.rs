//! Encoding classes of the x87 extended-precision format.
//!
//! The 80-bit format stores its integer bit explicitly, which opens up encodings
//! binary64 does not have. Classification is keyed on the exponent field `E` and
//! the mantissa `M`:
//!
//! | E          | M\[63:62\] | M\[61:0\] | Class            |
//! |------------|------------|-----------|------------------|
//! | 0          | 0x, M == 0 |           | Zero             |
//! | 0          | 0x, M != 0 |           | Denormal         |
//! | 0          | 1x         |           | Pseudo-denormal  |
//! | 0x7FFF     | 00         | 0         | Pseudo-infinity  |
//! | 0x7FFF     | 00         | != 0      | Pseudo-NaN       |
//! | 0x7FFF     | 01         |           | Pseudo-NaN       |
//! | 0x7FFF     | 10         | 0         | Infinity         |
//! | 0x7FFF     | 10         | != 0      | NaN (signaling)  |
//! | 0x7FFF     | 11         | 0         | Indefinite       |
//! | 0x7FFF     | 11         | != 0      | Quiet NaN        |
//! | other      | 0x         |           | Unnormal         |
//! | other      | 1x         |           | Normal           |

use std::fmt;

use crate::codec::FloatFields;
use crate::common::constants::{EXTENDED_CLASS_SHIFT, EXTENDED_INTEGER_BIT, EXTENDED_PAYLOAD_MASK};
use crate::format::EXTENDED;

/// Encoding class of an 80-bit extended-precision value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Positive or negative zero.
    Zero,
    /// Zero exponent, integer bit clear, non-zero fraction.
    Denormal,
    /// Zero exponent with the integer bit set.
    PseudoDenormal,
    /// All-ones exponent, integer bit clear, zero payload.
    PseudoInfinity,
    /// All-ones exponent with the integer bit clear and a non-zero payload.
    PseudoNan,
    /// All-ones exponent, integer bit set, quiet bit clear, zero payload.
    Infinity,
    /// All-ones exponent, integer bit set, quiet bit clear, non-zero payload.
    Nan,
    /// The x87 "real indefinite" default NaN: both class bits set, zero payload.
    Indefinite,
    /// All-ones exponent, both class bits set, non-zero payload.
    QuietNan,
    /// Exponent in the normal range with the integer bit clear.
    Unnormal,
    /// Exponent in the normal range with the integer bit set.
    Normal,
}

impl Classification {
    /// Whether this class converts to an `f64` NaN.
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::PseudoNan | Self::Nan)
    }

    /// Whether this class converts to an `f64` infinity.
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::PseudoInfinity | Self::Infinity)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "signed zero",
            Self::Denormal => "denormal",
            Self::PseudoDenormal => "pseudo-denormal",
            Self::PseudoInfinity => "pseudo-infinity",
            Self::PseudoNan => "pseudo-NaN",
            Self::Infinity => "infinity",
            Self::Nan => "NaN",
            Self::Indefinite => "floating-point indefinite",
            Self::QuietNan => "quiet NaN",
            Self::Unnormal => "unnormal",
            Self::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Classifies extended-precision fields.
///
/// Only the low 15 bits of the exponent and the low 64 bits of the mantissa
/// are inspected, matching the [`EXTENDED`] layout.
pub const fn classify(fields: FloatFields) -> Classification {
    let exponent = fields.exponent & EXTENDED.exponent_max();
    let mantissa = fields.mantissa as u64;
    let integer_bit = mantissa & EXTENDED_INTEGER_BIT != 0;

    if exponent == 0 {
        return if integer_bit {
            Classification::PseudoDenormal
        } else if mantissa == 0 {
            Classification::Zero
        } else {
            Classification::Denormal
        };
    }

    if exponent == EXTENDED.exponent_max() {
        let empty_payload = mantissa & EXTENDED_PAYLOAD_MASK == 0;
        return match (mantissa >> EXTENDED_CLASS_SHIFT, empty_payload) {
            (0b00, true) => Classification::PseudoInfinity,
            (0b00, false) | (0b01, _) => Classification::PseudoNan,
            (0b10, true) => Classification::Infinity,
            (0b10, false) => Classification::Nan,
            (_, true) => Classification::Indefinite,
            (_, false) => Classification::QuietNan,
        };
    }

    if integer_bit {
        Classification::Normal
    } else {
        Classification::Unnormal
    }
}
