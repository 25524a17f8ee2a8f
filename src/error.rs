//! Error types returned by fallible conversions.

use std::fmt;

/// Returned when a conversion from [`crate::Posit16`] to an integer type is
/// attempted on the `NaR` payload and the `throw-on-nar` feature is enabled.
///
/// Without that feature, such a conversion instead propagates the value
/// integer casts of `infinity` produce, matching the reference
/// implementation's default (non-throwing) build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotARealError;

impl fmt::Display for NotARealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert NaR to an integer")
    }
}

impl std::error::Error for NotARealError {}

/// Returned by [`std::str::FromStr`] when a string does not parse as a
/// posit. Parsing never panics and never partially mutates its destination;
/// on error, the caller's existing value (if any) is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid posit literal")
    }
}

impl std::error::Error for ParseError {}
