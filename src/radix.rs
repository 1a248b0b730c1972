//! Conversion between integers and strings in radix 2 to 36.
//!
//! Digits above 9 are the letters `A` to `Z`. Parsing accepts either case,
//! formatting always produces uppercase.
//!
//! ```
//! use bigmath::{radix, Integer};
//!
//! let x = radix::parse("-zz", 36).unwrap();
//! assert_eq!(x, Integer::from(-1295));
//! assert_eq!(radix::format(&x, 36).unwrap(), "-ZZ");
//! ```

use crate::digit::*;
use crate::error::{Error, ErrorCode, Result};
use crate::integer::Integer;
use crate::lib::{String, Vec};
use crate::math::{Digit, BITS};
use crate::natural::Natural;

// CHUNKS
// ------

/// Largest power of `radix` that fits in a digit, and its exponent.
///
/// Parsing and formatting move that many characters per pass over the
/// magnitude instead of one.
#[inline]
fn chunk(radix: u32) -> (Digit, usize) {
    let mut power = radix;
    let mut count = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        count += 1;
    }
    (power, count)
}

/// Upper bound on the digits needed for `chars` characters in `radix`.
#[inline]
fn parse_capacity(chars: usize, radix: u32) -> usize {
    // ceil(log2(radix)) bits per character.
    let bits = (32 - (radix - 1).leading_zeros()) as usize;
    chars.saturating_mul(bits) / BITS + 1
}

/// Upper bound on the characters needed for `digits` digits in `radix`.
#[inline]
fn format_capacity(digits: usize, radix: u32) -> usize {
    // floor(log2(radix)) bits per character.
    let bits = (31 - radix.leading_zeros()) as usize;
    digits.saturating_mul(BITS) / bits + 2
}

#[inline]
fn check_radix(radix: u32) -> Result<()> {
    if is_valid_radix(radix) {
        Ok(())
    } else {
        tracing::trace!(radix, "rejected radix");
        Err(Error::invalid_radix(radix))
    }
}

// PARSE
// -----

/// Parse an optionally negative string of digits in `radix`.
///
/// The string is an optional `-` followed by digits `0-9`, `a-z` or `A-Z`
/// whose values are below `radix`. No whitespace, `+` sign or prefix such as
/// `0x` is accepted. An empty digit string, as in `""` or `"-"`, is zero.
/// Negative zero parses to (positive) zero.
///
/// # Errors
///
/// - `InvalidRadix` if `radix` is not in `2..=36`.
/// - `InvalidDigit` for the first character that is not a digit in `radix`;
///   [`Error::offset`] is its byte offset in `s`.
/// - `AllocationFailure` if storage for the result cannot be reserved.
pub fn parse(s: &str, radix: u32) -> Result<Integer> {
    check_radix(radix)?;

    let (positive, start) = match s.as_bytes().first() {
        Some(b'-') => (false, 1),
        _ => (true, 0),
    };
    let digits = &s[start..];

    let mut result = Natural::zero();
    result.try_ensure_capacity(parse_capacity(digits.len(), radix))?;

    let (power, step) = chunk(radix);
    let mut counter = 0;
    let mut value: Digit = 0;

    for (index, c) in digits.char_indices() {
        // A full chunk of digits is buffered, add it to the magnitude.
        if counter == step {
            result.mul_small_assign(power);
            result.add_small_assign(value);
            counter = 0;
            value = 0;
        }

        let digit = match to_digit(c, radix) {
            Some(digit) => digit,
            None => {
                let offset = start + index;
                tracing::trace!(offset, radix, "rejected digit");
                return Err(Error::new(ErrorCode::InvalidDigit(c, radix), offset));
            }
        };
        value = value * radix + digit;
        counter += 1;
    }

    if counter != 0 {
        result.mul_small_assign(radix.pow(counter as u32));
        result.add_small_assign(value);
    }

    Ok(Integer::from_parts(result, positive))
}

// FORMAT
// ------

/// Format `n` in `radix`, with a leading `-` for negative numbers.
///
/// # Errors
///
/// `InvalidRadix` if `radix` is not in `2..=36`.
pub fn format(n: &Integer, radix: u32) -> Result<String> {
    check_radix(radix)?;
    Ok(format_magnitude(n.magnitude(), n.is_negative(), radix))
}

pub(crate) fn format_natural(n: &Natural, radix: u32) -> String {
    format_magnitude(n, false, radix)
}

fn format_magnitude(magnitude: &Natural, negative: bool, radix: u32) -> String {
    let sign = if negative { "-" } else { "" };

    if radix == 10 {
        if let Some(x) = magnitude.to_u64() {
            let mut buffer = itoa::Buffer::new();
            let digits = buffer.format(x);
            let mut out = String::with_capacity(sign.len() + digits.len());
            out.push_str(sign);
            out.push_str(digits);
            return out;
        }
    }

    let span = tracing::trace_span!("format", digits = magnitude.len(), radix);
    let _enter = span.enter();

    let (power, step) = chunk(radix);
    let mut rest = magnitude.clone();
    let mut reversed = Vec::with_capacity(format_capacity(magnitude.len(), radix));
    loop {
        let mut group = rest.div_small_assign(power);
        if rest.is_zero() {
            // Most significant group, without leading zeros.
            loop {
                reversed.push(to_char(group % radix));
                group /= radix;
                if group == 0 {
                    break;
                }
            }
            break;
        }
        for _ in 0..step {
            reversed.push(to_char(group % radix));
            group /= radix;
        }
    }

    let mut out = String::with_capacity(sign.len() + reversed.len());
    out.push_str(sign);
    out.extend(reversed.iter().rev().map(|&c| c as char));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn chunk_test() {
        assert_eq!(chunk(2), (1 << 31, 31));
        assert_eq!(chunk(10), (1_000_000_000, 9));
        assert_eq!(chunk(16), (1 << 28, 7));
        assert_eq!(chunk(36), (36u32.pow(6), 6));
    }

    #[test]
    fn capacity_test() {
        // 20 decimal characters need up to 67 bits, 3 digits.
        assert!(parse_capacity(20, 10) >= 3);
        assert_eq!(parse_capacity(0, 10), 1);
        // u64::MAX in binary is 64 characters.
        assert!(format_capacity(2, 2) >= 64);
        assert!(format_capacity(2, 10) >= 20);
    }

    #[test]
    fn parse_chunk_boundary_test() {
        // Exactly one, one and a bit, and two full chunks of decimal digits.
        assert_eq!(parse("999999999", 10).unwrap(), Integer::from(999_999_999));
        assert_eq!(
            parse("1000000000", 10).unwrap(),
            Integer::from(1_000_000_000)
        );
        assert_eq!(
            parse("999999999999999999", 10).unwrap(),
            Integer::from(999_999_999_999_999_999i64)
        );
    }

    #[test]
    fn parse_offset_test() {
        let err = parse("-12x4", 10).unwrap_err();
        assert_eq!(err.code(), &ErrorCode::InvalidDigit('x', 10));
        assert_eq!(err.offset(), 3);

        let err = parse("1\u{e9}", 16).unwrap_err();
        assert_eq!(err.code(), &ErrorCode::InvalidDigit('\u{e9}', 16));
        assert_eq!(err.offset(), 1);

        let err = parse("12--", 10).unwrap_err();
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn format_slow_path_test() {
        // 2^64 misses the itoa fast path.
        let x = Integer::from(u64::MAX) + Integer::from(1);
        assert_eq!(format(&x, 10).unwrap(), "18446744073709551616");
        assert_eq!(format(&-x, 10).unwrap(), "-18446744073709551616");

        // A chunk of zeros in the middle keeps its padding.
        let y = parse("1000000000000000000000000001", 10).unwrap();
        assert_eq!(y.to_string(), "1000000000000000000000000001");
    }

    #[test]
    fn format_natural_test() {
        assert_eq!(format_natural(&Natural::zero(), 10), "0");
        assert_eq!(format_natural(&Natural::zero(), 2), "0");
        assert_eq!(format_natural(&Natural::from(u32::MAX), 16), "FFFFFFFF");
        assert_eq!(
            format_natural(&Natural::from_digits(alloc::vec![0, 0, 1]), 16),
            "10000000000000000"
        );
    }
}
