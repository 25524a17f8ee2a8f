//! Textual input and output.
//!
//! By default `Display` renders a decimal approximation, the way the
//! reference's `operator<<` does outside of its rounding-error-free I/O
//! mode; with the `hex-io` feature it instead renders the canonical
//! `16.1xHHHHp` hex form, which round-trips exactly. `NaR` always prints
//! as the literal `"nar"`. `FromStr` never panics and leaves no partial
//! state on failure — a bad parse just returns [`ParseError`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::p::Posit16;

impl fmt::Display for Posit16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nar() {
            return f.write_str("nar");
        }
        if cfg!(feature = "hex-io") {
            write!(f, "16.1x{:04X}p", self.raw_bits())
        } else {
            fmt::Display::fmt(&self.to_f64(), f)
        }
    }
}

impl FromStr for Posit16 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("nar") {
            return Ok(Self::NAR);
        }
        if let Some(hex) = s
            .strip_prefix("16.1x")
            .or_else(|| s.strip_prefix("16.1X"))
            .and_then(|rest| rest.strip_suffix('p').or_else(|| rest.strip_suffix('P')))
        {
            return u16::from_str_radix(hex, 16)
                .map(Self::from_raw_bits)
                .map_err(|_| ParseError);
        }
        s.parse::<f64>().map(Self::from).map_err(|_| ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_nar() {
        assert_eq!(Posit16::NAR.to_string(), "nar");
    }

    #[test]
    fn displays_decimal_by_default() {
        assert_eq!(Posit16::from(1i32).to_string(), "1");
    }

    #[test]
    fn parses_decimal() {
        assert_eq!("1".parse::<Posit16>().unwrap(), Posit16::ONE);
        assert_eq!("-1".parse::<Posit16>().unwrap(), Posit16::MINUS_ONE);
    }

    #[test]
    fn parses_nar_case_insensitively() {
        assert_eq!("NaR".parse::<Posit16>().unwrap(), Posit16::NAR);
        assert_eq!("nar".parse::<Posit16>().unwrap(), Posit16::NAR);
    }

    #[test]
    fn parses_hex_form() {
        assert_eq!("16.1x4000p".parse::<Posit16>().unwrap(), Posit16::ONE);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("not a number".parse::<Posit16>(), Err(ParseError));
    }
}
