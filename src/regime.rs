//! Run-length decoding of the regime field.
//!
//! All four routines here share the same shape: scan the bits following
//! the sign bit for a run of identical bits, accumulating a signed
//! pattern-length `m`, and leave `remaining` positioned so that its top
//! two bits hold the exponent and its lower bits hold the raw fraction
//! (with the hidden leading one reinstated by `OR`-ing in `0x4000` at the
//! call site). The four variants differ only in how `m` is seeded and in
//! which direction it is nudged for a positive vs. a negative regime —
//! see the table in the crate's module docs for the operation-by-operation
//! sign convention.

/// Decode the regime of `bits`, the left-hand operand of an operation,
/// from scratch. Returns `(m, remaining)`.
#[must_use]
pub(crate) fn decode_regime(bits: u16) -> (i8, u16) {
    let mut m: i8 = 0;
    let mut remaining = bits << 2;
    if bits & 0x4000 != 0 {
        // positive regime: count the run of leading 1-bits
        while remaining >> 15 != 0 {
            m += 1;
            remaining <<= 1;
        }
    } else {
        // negative regime: count the run of leading 0-bits
        m = -1;
        while remaining >> 15 == 0 {
            m -= 1;
            remaining <<= 1;
        }
        remaining &= 0x7FFF;
    }
    (m, remaining)
}

/// Extract the addend (the operand being added or subtracted), continuing
/// the `m` accumulator from the left-hand operand's decode. Returns the
/// updated `(m, remaining)`.
#[must_use]
pub(crate) fn extract_addend(bits: u16, mut m: i8) -> (i8, u16) {
    let mut remaining = bits << 2;
    if bits & 0x4000 != 0 {
        while remaining >> 15 != 0 {
            m -= 1;
            remaining <<= 1;
        }
    } else {
        m += 1;
        while remaining >> 15 == 0 {
            m += 1;
            remaining <<= 1;
        }
        remaining &= 0x7FFF;
    }
    (m, remaining)
}

/// Extract the multiplicand (the right-hand operand of a multiply),
/// continuing the `m` accumulator from the left-hand operand's decode.
#[must_use]
pub(crate) fn extract_multiplicand(bits: u16, mut m: i8) -> (i8, u16) {
    let mut remaining = bits << 2;
    if bits & 0x4000 != 0 {
        while remaining >> 15 != 0 {
            m += 1;
            remaining <<= 1;
        }
    } else {
        m -= 1;
        while remaining >> 15 == 0 {
            m -= 1;
            remaining <<= 1;
        }
        remaining &= 0x7FFF;
    }
    (m, remaining)
}

/// Extract the dividend (the divisor operand of a divide), continuing the
/// `m` accumulator from the left-hand operand's decode.
#[must_use]
pub(crate) fn extract_dividend(bits: u16, mut m: i8) -> (i8, u16) {
    let mut remaining = bits << 2;
    if bits & 0x4000 != 0 {
        while remaining >> 15 != 0 {
            m -= 1;
            remaining <<= 1;
        }
    } else {
        m += 1;
        while remaining >> 15 == 0 {
            m += 1;
            remaining <<= 1;
        }
        remaining &= 0x7FFF;
    }
    (m, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_one() {
        // 0x4000 = 1.0: sign 0, regime "10" (k=1,r=1 -> R=0), exp 0, frac 0
        let (m, remaining) = decode_regime(0x4000);
        assert_eq!(m, 0);
        assert_eq!(remaining >> 14, 0);
    }

    #[test]
    fn decode_two() {
        // 0x5000 = 2.0: regime "10", exp 1
        let (m, remaining) = decode_regime(0x5000);
        assert_eq!(m, 0);
        assert_eq!(remaining >> 14, 1);
    }

    #[test]
    fn decode_negative_regime() {
        // 0x2000 = 0b0010_0000_0000_0000: regime run of 0s before the 1
        let (m, _remaining) = decode_regime(0x2000);
        assert!(m < 0);
    }
}
