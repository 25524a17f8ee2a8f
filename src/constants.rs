//! Bit layout and named payload constants for a POSIT16-1 word.
//!
//! Layout, MSB to LSB: `[S|R..|R0|EE|F..]` — one sign bit, a run-length
//! regime, one exponent bit (`es == 1`), and whatever bits remain as
//! fraction.

/// Mask isolating the sign bit of a raw payload.
pub const SIGN_MASK: u16 = 0x8000;

/// Not-a-Real: the sole exceptional value. Its own two's-complement
/// negation, so `neg(NAR) == NAR`.
pub const NAR: u16 = 0x8000;

/// The unique encoding of real zero.
pub const ZERO: u16 = 0x0000;

/// `1.0`.
pub const ONE: u16 = 0x4000;

/// `-1.0`.
pub const MINUS_ONE: u16 = 0xC000;

/// The largest finite positive value representable.
pub const MAXPOS: u16 = 0x7FFF;

/// The smallest positive value representable.
pub const MINPOS: u16 = 0x0001;

/// `true` if `bits` is the NaR payload.
#[must_use]
pub const fn is_nar(bits: u16) -> bool {
    bits == NAR
}

/// `true` if `bits` is the zero payload.
#[must_use]
pub const fn is_zero(bits: u16) -> bool {
    bits == ZERO
}

/// `true` if `bits` encodes exactly `1.0`.
#[must_use]
pub const fn is_one(bits: u16) -> bool {
    bits == ONE
}

/// `true` if `bits` encodes exactly `-1.0`.
#[must_use]
pub const fn is_minus_one(bits: u16) -> bool {
    bits == MINUS_ONE
}

/// `true` if the sign bit is set. NaR counts as negative (it shares the
/// sign bit with the most negative regular value).
#[must_use]
pub const fn is_negative(bits: u16) -> bool {
    bits & SIGN_MASK != 0
}

/// `true` if the sign bit is clear. Zero counts as positive.
#[must_use]
pub const fn is_positive(bits: u16) -> bool {
    !is_negative(bits)
}

/// `true` if `bits` is an exact power of two (including zero, by
/// convention of the reference implementation: the low fraction bit is
/// clear).
#[must_use]
pub const fn is_power_of_two(bits: u16) -> bool {
    bits & 1 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_spec() {
        assert_eq!(NAR, 0x8000);
        assert_eq!(ZERO, 0x0000);
        assert_eq!(ONE, 0x4000);
        assert_eq!(MINUS_ONE, 0xC000);
        assert_eq!(MAXPOS, 0x7FFF);
        assert_eq!(MINPOS, 0x0001);
    }

    #[test]
    fn predicates() {
        assert!(is_nar(NAR));
        assert!(!is_nar(ZERO));
        assert!(is_zero(ZERO));
        assert!(is_one(ONE));
        assert!(is_minus_one(MINUS_ONE));
        assert!(is_negative(MINUS_ONE));
        assert!(is_negative(NAR));
        assert!(is_positive(ONE));
        assert!(is_positive(ZERO));
        assert!(is_power_of_two(ZERO));
        assert!(is_power_of_two(ONE));
        assert!(!is_power_of_two(0x4001));
    }
}
