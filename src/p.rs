//! The `Posit16` value type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Bounded, NumCast, One, ToPrimitive, Zero};

use crate::arith;
use crate::constants::{self, is_negative, is_positive};
use crate::convert;
use crate::error::NotARealError;

/// A 16-bit, 1-exponent-bit posit (`posit<16,1>` in the common notation).
///
/// A posit is similar to a float, in that it forms a computer representation
/// of real numbers, but with several distinctive features:
///
/// - It has no redundant representations: every bit pattern decodes to a
///   distinct real number or to the single exceptional value below.
/// - It has only one non-real value, `NaR` ("Not a Real"), in place of the
///   several NaN payloads and two infinities IEEE-754 carries.
/// - Its precision tapers: values near 1 get the most fraction bits, values
///   far from 1 trade fraction bits for dynamic range.
///
/// Bit layout, MSB to LSB: `[S|R..|R0|EE|F..]` — one sign bit, a run-length
/// regime, one exponent bit, and whatever bits remain as fraction. This type
/// is a fixed, monomorphic specialization of that layout for 16 bits total
/// and a single exponent bit; it is not generic over width or exponent size.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Posit16(u16);

impl Posit16 {
    /// Not-a-Real: the sole exceptional value. Its own two's-complement
    /// negation, so `-NAR == NAR`.
    pub const NAR: Self = Self(constants::NAR);
    /// The unique encoding of real zero.
    pub const ZERO: Self = Self(constants::ZERO);
    /// `1.0`.
    pub const ONE: Self = Self(constants::ONE);
    /// `-1.0`.
    pub const MINUS_ONE: Self = Self(constants::MINUS_ONE);
    /// The largest finite positive value representable.
    pub const MAXPOS: Self = Self(constants::MAXPOS);
    /// The smallest positive value representable.
    pub const MINPOS: Self = Self(constants::MINPOS);

    /// Build a `Posit16` directly from its raw 16-bit payload.
    ///
    /// No validation is performed — every `u16` value is a valid payload
    /// (there are no illegal bit patterns), so this never fails.
    #[must_use]
    pub const fn from_raw_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw 16-bit payload.
    #[must_use]
    pub const fn raw_bits(self) -> u16 {
        self.0
    }

    /// `true` if `self` is the `NaR` payload.
    #[must_use]
    pub const fn is_nar(self) -> bool {
        constants::is_nar(self.0)
    }

    /// `true` if `self` is the zero payload.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        constants::is_zero(self.0)
    }

    /// `true` if `self` encodes exactly `1.0`.
    #[must_use]
    pub const fn is_one(self) -> bool {
        constants::is_one(self.0)
    }

    /// `true` if `self` encodes exactly `-1.0`.
    #[must_use]
    pub const fn is_minus_one(self) -> bool {
        constants::is_minus_one(self.0)
    }

    /// `true` if the sign bit is set. `NaR` counts as negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        is_negative(self.0)
    }

    /// `true` if the sign bit is clear. Zero counts as positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        is_positive(self.0)
    }

    /// `true` if `self` is an exact power of two (including zero).
    #[must_use]
    pub const fn is_power_of_two(self) -> bool {
        constants::is_power_of_two(self.0)
    }

    /// `1` if the sign bit is clear, `-1` if it is set. Unlike the
    /// reference implementation, this checks the sign bit (`0x8000`), not
    /// the unrelated bit the reference's `sign_value` reads by mistake.
    #[must_use]
    pub const fn sign_value(self) -> i32 {
        if is_negative(self.0) {
            -1
        } else {
            1
        }
    }

    /// The two's-complement negation of the payload.
    #[must_use]
    pub const fn twos_complement(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// The next representable value towards positive infinity (i.e. towards
    /// `maxpos`, since posits have no infinities).
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// The next representable value towards `minpos`'s negation.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    /// `1 / self`.
    #[must_use]
    pub fn reciprocal(self) -> Self {
        Self::ONE / self
    }

    /// A total order over payloads treating the 16-bit word as signed,
    /// matching [`Ord`]. `NaR` sorts below every negative value.
    #[must_use]
    pub fn compare(self, other: Self) -> Ordering {
        (self.0 as i16).cmp(&(other.0 as i16))
    }

    /// An IEEE-754-style partial order: `NaR` compares unordered with
    /// everything, including itself, instead of sorting as the least value.
    #[must_use]
    pub fn partial_compare(self, other: Self) -> Option<Ordering> {
        if self.is_nar() || other.is_nar() {
            None
        } else {
            Some(self.compare(other))
        }
    }

    /// Convert to `f64`. `NaR` becomes `NAN`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        convert::float::to_f64(self.0)
    }

    /// Convert to `f32` by narrowing from `f64`. `NaR` becomes `NAN`.
    #[must_use]
    pub fn to_f32(self) -> f32 {
        convert::float::to_f32(self.0)
    }

    /// Truncating conversion to `i64`, the way `int(to_float())` truncates
    /// in the reference. See [`NotARealError`] for `NaR`'s behavior.
    pub fn to_i64(self) -> Result<i64, NotARealError> {
        convert::int::to_i64(self.0)
    }

    /// Truncating conversion to `u64`. See [`NotARealError`] for `NaR`'s
    /// behavior.
    pub fn to_u64(self) -> Result<u64, NotARealError> {
        convert::int::to_u64(self.0)
    }
}

impl fmt::Debug for Posit16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Posit16").field(&format_args!("{:#06x}", self.0)).finish()
    }
}

impl Default for Posit16 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Posit16 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(*other))
    }
}

impl Ord for Posit16 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl Neg for Posit16 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.is_zero() || self.is_nar() {
            return self;
        }
        self.twos_complement()
    }
}

// `arith::add` only produces a correct result when its two bit patterns
// carry the same sign; `arith::sub` only when they carry opposite signs.
// These impls route through whichever kernel op that precondition holds
// for, mirroring the reference's free `operator+`/`operator-`.
impl Add for Posit16 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.is_negative() == rhs.is_negative() {
            Self(arith::add(self.0, rhs.0))
        } else {
            Self(arith::sub(self.0, rhs.0))
        }
    }
}

impl Sub for Posit16 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let negated_rhs = rhs.twos_complement();
        if self.is_negative() == rhs.is_negative() {
            Self(arith::sub(self.0, negated_rhs.0))
        } else {
            Self(arith::add(self.0, negated_rhs.0))
        }
    }
}

impl Mul for Posit16 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(arith::mul(self.0, rhs.0))
    }
}

impl Div for Posit16 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(arith::div(self.0, rhs.0))
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Posit16 {
                fn from(value: $ty) -> Self {
                    Self(convert::int::from_i64(i64::from(value)))
                }
            }
        )+
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Posit16 {
                fn from(value: $ty) -> Self {
                    Self(convert::int::from_u64(u64::from(value)))
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Posit16 {
    fn from(value: f32) -> Self {
        Self(convert::float::from_f32(value))
    }
}

impl From<f64> for Posit16 {
    fn from(value: f64) -> Self {
        Self(convert::float::from_f64(value))
    }
}

impl Zero for Posit16 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Posit16::is_zero(*self)
    }
}

impl One for Posit16 {
    fn one() -> Self {
        Self::ONE
    }
}

impl Bounded for Posit16 {
    fn min_value() -> Self {
        Self::MAXPOS.twos_complement()
    }

    fn max_value() -> Self {
        Self::MAXPOS
    }
}

impl ToPrimitive for Posit16 {
    fn to_i64(&self) -> Option<i64> {
        Posit16::to_i64(*self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        Posit16::to_u64(*self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Posit16::to_f64(*self))
    }
}

impl NumCast for Posit16 {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Posit16::from)
    }
}
