//! # bigmath
//!
//! Arbitrary-precision integers in sign-magnitude form.
//!
//! The crate has three layers:
//!
//! - [`Natural`], an unsigned magnitude stored as little-endian base 2<sup>32</sup>
//!   digits, implementing schoolbook addition, subtraction and multiplication,
//!   short division, and Knuth's Algorithm D for multi-digit divisors.
//! - [`Integer`], a magnitude paired with a sign flag. Division rounds so that
//!   the remainder always lies in `0..|divisor|`.
//! - The [`radix`] codec, converting between integers and strings in any
//!   base from 2 to 36.
//!
//! ```
//! use bigmath::Integer;
//!
//! let a: Integer = "123456789012345678901234567890".parse().unwrap();
//! let b = Integer::from(-7);
//!
//! let (q, r) = a.div_mod(&b).unwrap();
//! assert_eq!(&q * &b + &r, a);
//! assert!(!r.is_negative());
//!
//! assert_eq!(Integer::from(255).to_str_radix(16).unwrap(), "FF");
//! ```
//!
//! # Errors
//!
//! Arithmetic that can fail for a given input returns [`Result`]:
//! dividing by zero, parsing a digit that is out of range for the radix, or
//! asking for a radix outside `2..=36`. Violating an internal precondition,
//! such as subtracting a larger [`Natural`] from a smaller one, is a bug in
//! the caller and is caught by debug assertions.
//!
//! # Features
//!
//! - `std` *(default)*: implements `std::error::Error` for [`Error`].
//! - `alloc`: builds against `core` and `alloc` only.
//! - `serde`: serializes [`Integer`] and [`Natural`] as base-10 strings.

#![doc(html_root_url = "https://docs.rs/bigmath/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::doc_markdown,
    clippy::many_single_char_names,
    clippy::needless_range_loop,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error! {
    "bigmath requires that either `std` (default) or `alloc` feature is enabled"
}

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    pub(crate) use alloc::string::String;
    pub(crate) use alloc::vec::Vec;
    pub(crate) use core::{cmp, fmt, iter, mem, ops, str};
}

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::integer::Integer;
#[doc(inline)]
pub use crate::math::Digit;
#[doc(inline)]
pub use crate::natural::Natural;

pub mod error;
pub mod radix;

mod digit;
mod integer;
mod math;
mod natural;
mod ops;
mod slice;

#[cfg(feature = "serde")]
mod ser;
