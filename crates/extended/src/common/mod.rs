//! Common types shared across the crate.
//!
//! This module provides:
//! 1. **Error Handling:** The [`ConversionError`] taxonomy and the crate-wide [`Result`] alias.
//! 2. **Constants:** Named bit masks and shifts for the x87 mantissa and binary64 NaN encoding.

/// Bit masks and shifts used by the decoder.
pub mod constants;

/// Error types for decoding and conversion.
pub mod error;

pub use error::{ConversionError, ErrorKind, Field, Result};
