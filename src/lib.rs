//! A 16-bit, 1-exponent-bit posit: a drop-in alternative to IEEE-754 binary16
//! that represents real numbers with a tapered, sign-magnitude-under-two's-
//! complement encoding instead of a fixed exponent/mantissa split.
//!
//! A posit is similar to a float, in that it forms a computer representation
//! of real numbers, but with several distinctive features:
//!
//! - It has no redundant representations (every bit pattern decodes to a
//!   distinct real number or the sentinel below).
//! - It has only one non-real value, `NaR` ("Not a Real"), in place of the
//!   several NaN payloads and two infinities IEEE-754 carries.
//! - Its precision tapers: values near 1 get the most fraction bits, values
//!   far from 1 trade fraction bits for a wider dynamic range.
//!
//! This crate implements exactly one specialization: 16 bits wide, 1
//! exponent bit (`posit<16,1>` in the common notation). It is not generic
//! over width or exponent-bit-count; [`Posit16`] is a monomorphic, fixed-size
//! value type, not a template instantiation.
//!
//! ```
//! use posit16::Posit16;
//!
//! let a = Posit16::from(1i32);
//! let b = Posit16::from(2i32);
//! assert_eq!(a + b, Posit16::from(3i32));
//! assert_eq!((a / Posit16::ZERO).is_nar(), true);
//! ```

#![warn(
    missing_docs,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    missing_abi,
    noop_method_call,
    unused_import_braces,
    unused_lifetimes,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]
#![allow(clippy::unreadable_literal, clippy::many_single_char_names)]

mod arith;
mod constants;
mod convert;
mod error;
mod fmt;
mod regime;

mod p;

pub use constants::{MAXPOS, MINPOS, MINUS_ONE, NAR, ONE, SIGN_MASK, ZERO};
pub use error::{NotARealError, ParseError};
pub use p::Posit16;
