//! Conversion configuration.
//!
//! This module defines the options a caller can set for a conversion. It provides:
//! 1. **Defaults:** Baseline options (little-endian input, warnings enabled).
//! 2. **Enums:** [`ByteOrder`], parsed from `"little"` / `"big"`.
//! 3. **Structures:** [`ConversionConfig`], deserializable from JSON or any serde format.
//!
//! Missing fields fall back to the defaults, so `{}` is a valid configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConversionError;

/// Default configuration constants.
mod defaults {
    use super::ByteOrder;

    /// x87 stores extended values little-endian in memory.
    pub const BYTE_ORDER: ByteOrder = ByteOrder::Little;

    /// Emit a `tracing` warning whenever mantissa bits are discarded.
    pub const WARN_ON_PRECISION_LOSS: bool = true;
}

/// Byte order of an encoded buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl FromStr for ByteOrder {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" => Ok(Self::Little),
            "big" => Ok(Self::Big),
            other => Err(ConversionError::UnknownByteOrder(other.to_owned())),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => f.write_str("little"),
            Self::Big => f.write_str("big"),
        }
    }
}

/// Options applied by [`convert_with`](crate::extended::convert_with).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Byte order of the 10-byte input buffer.
    pub byte_order: ByteOrder,
    /// Emit a WARN event when the mantissa is truncated.
    ///
    /// The [`precision_lost`](crate::extended::Conversion::precision_lost) flag is
    /// reported regardless of this setting.
    pub warn_on_precision_loss: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            byte_order: defaults::BYTE_ORDER,
            warn_on_precision_loss: defaults::WARN_ON_PRECISION_LOSS,
        }
    }
}

impl ConversionConfig {
    /// Returns a copy of this configuration with the given byte order.
    #[must_use]
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Returns a copy of this configuration with precision-loss warnings toggled.
    #[must_use]
    pub const fn with_precision_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_precision_loss = enabled;
        self
    }
}
