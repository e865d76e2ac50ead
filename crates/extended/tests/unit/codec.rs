//! # Codec Tests
//!
//! Decomposition and recomposition of sign/exponent/mantissa fields for the
//! binary64 and extended layouts, plus a few narrower layouts to show the codec
//! is not tied to either.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use x86_extended_precision::codec::bitmask;
use x86_extended_precision::common::Field;
use x86_extended_precision::{
    ByteOrder, ConversionError, DOUBLE, EXTENDED, FloatFields, FloatFormat, decompose, recompose,
};

use crate::common::extended_bytes;

/// IEEE 754 binary16, used as a third layout.
const HALF: FloatFormat = FloatFormat::new(5, 10, 15);

#[test]
fn test_decompose_double_two() {
    let fields = decompose(&2.0f64.to_le_bytes(), &DOUBLE, ByteOrder::Little).unwrap();
    assert_eq!(fields, FloatFields::new(false, 1024, 0));
}

#[test]
fn test_decompose_double_big_endian() {
    let fields = decompose(&(-1.5f64).to_be_bytes(), &DOUBLE, ByteOrder::Big).unwrap();
    assert_eq!(fields, FloatFields::new(true, 1023, 1 << 51));
}

#[test]
fn test_decompose_extended_fields() {
    let bytes = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8C, 0x04, 0x40];
    let fields = decompose(&bytes, &EXTENDED, ByteOrder::Little).unwrap();
    assert_eq!(
        fields,
        FloatFields::new(false, 0x4004, 0x8C00_0000_0000_0000)
    );
}

#[test]
fn test_decompose_extended_sign_only() {
    let bytes = extended_bytes(true, 0, 0);
    let fields = decompose(&bytes, &EXTENDED, ByteOrder::Little).unwrap();
    assert_eq!(fields, FloatFields::new(true, 0, 0));
}

#[test]
fn test_decompose_half() {
    // 1.0 in binary16 is 0x3C00
    let fields = decompose(&[0x00, 0x3C], &HALF, ByteOrder::Little).unwrap();
    assert_eq!(fields, FloatFields::new(false, 15, 0));
}

#[test]
fn test_decompose_rejects_wrong_length() {
    let err = decompose(&[0u8; 9], &EXTENDED, ByteOrder::Little).unwrap_err();
    assert_eq!(
        err,
        ConversionError::InvalidLength {
            expected: 10,
            actual: 9
        }
    );

    let err = decompose(&[0u8; 10], &DOUBLE, ByteOrder::Big).unwrap_err();
    assert_eq!(
        err,
        ConversionError::InvalidLength {
            expected: 8,
            actual: 10
        }
    );
}

#[test]
fn test_decompose_rejects_wide_format() {
    let wide = FloatFormat::new(15, 120, 16383);
    let err = decompose(&[0u8; 17], &wide, ByteOrder::Little).unwrap_err();
    assert_eq!(err, ConversionError::FormatTooWide { bits: 136 });
}

#[test]
fn test_recompose_double_matches_host() {
    let fields = FloatFields::new(true, 1024, 1 << 51);

    let bytes = recompose(fields, &DOUBLE, ByteOrder::Little).unwrap();
    assert_eq!(bytes, (-3.0f64).to_le_bytes().to_vec());

    let bytes = recompose(fields, &DOUBLE, ByteOrder::Big).unwrap();
    assert_eq!(bytes, (-3.0f64).to_be_bytes().to_vec());
}

#[test]
fn test_recompose_rejects_exponent_overflow() {
    let fields = FloatFields::new(false, 0x800, 0);
    let err = recompose(fields, &DOUBLE, ByteOrder::Little).unwrap_err();
    assert_eq!(
        err,
        ConversionError::FieldOverflow {
            field: Field::Exponent,
            value: 0x800,
            bits: 11,
        }
    );
}

#[test]
fn test_recompose_rejects_mantissa_overflow() {
    let fields = FloatFields::new(false, 1, 1 << 64);
    let err = recompose(fields, &EXTENDED, ByteOrder::Little).unwrap_err();
    assert_eq!(
        err,
        ConversionError::FieldOverflow {
            field: Field::Mantissa,
            value: 1 << 64,
            bits: 64,
        }
    );
}

#[test]
fn test_padding_bits_are_dropped() {
    // 1 + 5 + 3 = 9 bits in two bytes; the top 7 bits are padding.
    let tiny = FloatFormat::new(5, 3, 15);
    let fields = decompose(&[0xFF, 0xFF], &tiny, ByteOrder::Little).unwrap();
    assert_eq!(fields, FloatFields::new(true, 0x1F, 0x7));
    let bytes = recompose(fields, &tiny, ByteOrder::Little).unwrap();
    assert_eq!(bytes, vec![0xFF, 0x01]);
}

#[test]
fn test_bitmask_widths() {
    assert_eq!(bitmask(EXTENDED.exponent_bits), 0x7FFF);
    assert_eq!(bitmask(DOUBLE.mantissa_bits), 0x000F_FFFF_FFFF_FFFF);
}

proptest! {
    #[test]
    fn prop_extended_round_trip(bytes in any::<[u8; 10]>(), big in any::<bool>()) {
        let order = if big { ByteOrder::Big } else { ByteOrder::Little };
        let fields = decompose(&bytes, &EXTENDED, order).unwrap();
        prop_assert!(fields.exponent <= 0x7FFF);
        prop_assert!(fields.mantissa <= u128::from(u64::MAX));
        prop_assert_eq!(recompose(fields, &EXTENDED, order).unwrap(), bytes.to_vec());
    }

    #[test]
    fn prop_normal_extended_round_trip(
        sign in any::<bool>(),
        exponent in 1u16..0x7FFF,
        fraction in any::<u64>(),
    ) {
        let bytes = extended_bytes(sign, exponent, fraction | (1 << 63));
        let fields = decompose(&bytes, &EXTENDED, ByteOrder::Little).unwrap();
        prop_assert_eq!(fields.exponent, u32::from(exponent));
        prop_assert_eq!(recompose(fields, &EXTENDED, ByteOrder::Little).unwrap(), bytes.to_vec());
    }

    #[test]
    fn prop_double_matches_host_bits(value in any::<f64>()) {
        let fields = decompose(&value.to_le_bytes(), &DOUBLE, ByteOrder::Little).unwrap();
        let bits = value.to_bits();
        prop_assert_eq!(fields.sign, bits >> 63 == 1);
        prop_assert_eq!(u64::from(fields.exponent), (bits >> 52) & 0x7FF);
        prop_assert_eq!(fields.mantissa, u128::from(bits & 0x000F_FFFF_FFFF_FFFF));
    }

    #[test]
    fn prop_byte_orders_agree(bytes in any::<[u8; 10]>()) {
        let mut reversed = bytes;
        reversed.reverse();
        prop_assert_eq!(
            decompose(&bytes, &EXTENDED, ByteOrder::Little).unwrap(),
            decompose(&reversed, &EXTENDED, ByteOrder::Big).unwrap()
        );
    }
}
