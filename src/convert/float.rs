//! Float encode/decode.
//!
//! The reference delegates both directions to a generic `convert_to_bb`
//! helper shared across every posit width, which is not present in the
//! retrieved source. This module reconstructs its contract for POSIT16-1
//! specifically: encoding packs a binary64 mantissa into the same 32-bit
//! fixed-point register [`crate::arith::round`] already knows how to turn
//! into a correctly-rounded payload, and decoding reassembles
//! `sign * useed^k * 2^e * (1 + fraction)` directly in `f64`.
//!
//! `f64` carries enough precision (52 mantissa bits) for every finite
//! POSIT16-1 value to round-trip exactly, so no 80-bit intermediate is
//! needed; `f32` is handled by widening to `f64` and back.

use crate::arith::round;
use crate::constants::{is_nar, is_negative, is_zero, NAR, ZERO};
use crate::regime::decode_regime;

/// Encode an `f64` as the nearest POSIT16-1 payload, rounding to nearest,
/// ties to even.
#[must_use]
pub(crate) fn from_f64(value: f64) -> u16 {
    if value == 0.0 {
        return ZERO;
    }
    if value.is_nan() || value.is_infinite() {
        return NAR;
    }

    let sign = value.is_sign_negative();
    let bits = value.to_bits();
    let raw_exponent = ((bits >> 52) & 0x7FF) as i64;
    let raw_mantissa = bits & 0x000F_FFFF_FFFF_FFFF;

    if raw_exponent == 0 {
        // Subnormal doubles are many orders of magnitude smaller than
        // POSIT16-1's minpos (~2^-28); they always round to zero.
        return ZERO;
    }

    let binary_exponent = raw_exponent - 1023;
    // scale = 2*m + exp_bit, exp_bit in {0, 1}; m may run far outside i8
    // range for extreme doubles, but any |m| this large saturates to
    // minpos/maxpos in `round` regardless of its exact magnitude.
    let m = (binary_exponent.div_euclid(2)).clamp(-20, 20) as i8;
    let exp_bit = binary_exponent.rem_euclid(2) as u16;

    // bits 29..1 hold as much of the mantissa as the register has room
    // for; bit 0 is a sticky flag for everything below that.
    let mantissa_top29 = (raw_mantissa >> 23) as u32;
    let sticky = u32::from(raw_mantissa & 0x7F_FFFF != 0);
    let fraction = 0x4000_0000u32 | (mantissa_top29 << 1) | sticky;

    let magnitude = round(m, exp_bit, fraction);
    if sign {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Decode a POSIT16-1 payload to its nearest `f64` value.
#[must_use]
pub(crate) fn to_f64(bits: u16) -> f64 {
    if is_zero(bits) {
        return 0.0;
    }
    if is_nar(bits) {
        return f64::NAN;
    }

    let sign = is_negative(bits);
    let magnitude_bits = if sign { bits.wrapping_neg() } else { bits };
    let (m, remaining) = decode_regime(magnitude_bits);
    let exp_bit = (remaining >> 14) as i32;
    let fraction_bits = u32::from(remaining & 0x3FFF);

    let fraction = 1.0 + f64::from(fraction_bits) / 16384.0;
    let scale = 2 * i32::from(m) + exp_bit;
    let value = fraction * 2f64.powi(scale);
    if sign {
        -value
    } else {
        value
    }
}

/// Encode an `f32` by widening to `f64`.
#[must_use]
pub(crate) fn from_f32(value: f32) -> u16 {
    from_f64(f64::from(value))
}

/// Decode to `f32` by narrowing from `f64`.
#[must_use]
pub(crate) fn to_f32(bits: u16) -> f32 {
    to_f64(bits) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MINUS_ONE, ONE};

    #[test]
    fn one_round_trips() {
        assert_eq!(from_f64(1.0), ONE);
        assert_eq!(to_f64(ONE), 1.0);
    }

    #[test]
    fn negative_one_round_trips() {
        assert_eq!(from_f64(-1.0), MINUS_ONE);
        assert_eq!(to_f64(MINUS_ONE), -1.0);
    }

    #[test]
    fn two_and_half_encode_exactly() {
        assert_eq!(from_f64(2.0), 0x5000);
        assert_eq!(from_f64(0.5), 0x3000);
    }

    #[test]
    fn one_and_a_half_keeps_fraction_bits() {
        assert_eq!(from_f64(1.5), 0x4800);
        assert_eq!(to_f64(0x4800), 1.5);
    }

    #[test]
    fn zero_and_nar() {
        assert_eq!(from_f64(0.0), ZERO);
        assert!(to_f64(NAR).is_nan());
        assert_eq!(from_f64(f64::NAN), NAR);
        assert_eq!(from_f64(f64::INFINITY), NAR);
    }

    #[test]
    fn f32_narrows_and_widens() {
        assert_eq!(from_f32(1.0), ONE);
        assert_eq!(to_f32(ONE), 1.0f32);
    }
}
