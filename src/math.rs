//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant digit,
//! and `0` is the least significant digit.
//!
//! Buffers handed out by this module are normalized: they hold at least one
//! digit, and the most significant digit is nonzero unless the value is zero.

use crate::lib::{cmp, mem, Vec};
use crate::slice::*;
use alloc::collections::TryReserveError;

// ALIASES
// -------

/// Type for a single digit of a big integer.
///
/// A digit is analogous to a digit in base10, except it stores a full 32-bit
/// word, so a magnitude is a number in base 2<sup>32</sup>.
pub type Digit = u32;

// Twice as wide as a digit, holds any product of two digits plus two carries.
pub(crate) type Wide = u64;

pub(crate) type DigitVec = Vec<Digit>;

/// Number of bits in a digit.
pub(crate) const BITS: usize = mem::size_of::<Digit>() * 8;

/// The radix of the digit representation, `2^32`.
pub(crate) const BASE: Wide = 1 << BITS;

/// Cast to digit type, keeping the low bits.
#[inline(always)]
pub(crate) fn as_digit(x: Wide) -> Digit {
    x as Digit
}

// SPLIT
// -----

/// Split u64 into digits, in little-endian order.
#[inline]
pub(crate) fn split_u64(x: u64) -> [Digit; 2] {
    [as_digit(x), as_digit(x >> BITS)]
}

/// Get digit `index`, treating positions past the end as zero.
#[inline]
pub(crate) fn get(x: &[Digit], index: usize) -> Digit {
    x.get(index).copied().unwrap_or(0)
}

// NONZERO

/// Check if any of the digits are non-zero.
#[inline]
pub(crate) fn nonzero(x: &[Digit]) -> bool {
    x.iter().rev().any(|&x| x != 0)
}

// CAPACITY
// --------

/// Capacity a buffer grows to, starting from `current`, to hold `capacity`.
///
/// Grows by half of the current capacity per step. Buffers of capacity 0 or 1
/// jump straight to the requested size.
#[inline]
pub(crate) fn grown_capacity(current: usize, capacity: usize) -> usize {
    if current > 1 {
        let mut grown = current;
        while grown < capacity {
            grown = grown.saturating_add(grown / 2);
        }
        grown
    } else {
        capacity
    }
}

/// Reserve vec capacity so that it holds at least `capacity` digits in total.
#[inline]
pub(crate) fn reserve(vec: &mut DigitVec, capacity: usize) {
    if vec.capacity() < capacity {
        let grown = grown_capacity(vec.capacity(), capacity);
        vec.reserve_exact(grown - vec.len());
    }
}

/// Fallible `reserve`, reporting allocation failure instead of aborting.
#[inline]
pub(crate) fn try_reserve(vec: &mut DigitVec, capacity: usize) -> Result<(), TryReserveError> {
    if vec.capacity() < capacity {
        let grown = grown_capacity(vec.capacity(), capacity);
        vec.try_reserve_exact(grown - vec.len())?;
    }
    Ok(())
}

/// Resize vec to size, growing capacity with the crate's growth policy.
#[inline]
fn resize(vec: &mut DigitVec, len: usize, value: Digit) {
    reserve(vec, len);
    vec.resize(len, value);
}

/// Push a digit, growing capacity with the crate's growth policy.
#[inline]
fn push(vec: &mut DigitVec, value: Digit) {
    let len = vec.len();
    reserve(vec, len + 1);
    vec.push(value);
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
use super::*;

// ADDITION

/// Add two digits and an incoming carry, returning the sum and the carry out.
#[inline]
pub fn add(x: Digit, y: Digit, carry: bool) -> (Digit, bool) {
    let sum = x as Wide + y as Wide + carry as Wide;
    (as_digit(sum), (sum >> BITS) != 0)
}

/// AddAssign with carry, returning the carry out.
#[inline]
pub fn iadd(x: &mut Digit, y: Digit, carry: bool) -> bool {
    let t = add(*x, y, carry);
    *x = t.0;
    t.1
}

// SUBTRACTION

/// Subtract a digit and an incoming borrow, returning the difference and the
/// borrow out.
///
/// On underflow the difference is `BASE + x - y - borrow`.
#[inline]
pub fn sub(x: Digit, y: Digit, borrow: bool) -> (Digit, bool) {
    let x = x as Wide;
    let y = y as Wide + borrow as Wide;
    if x >= y {
        (as_digit(x - y), false)
    } else {
        (as_digit(BASE + x - y), true)
    }
}

/// SubAssign with borrow, returning the borrow out.
#[inline]
pub fn isub(x: &mut Digit, y: Digit, borrow: bool) -> bool {
    let t = sub(*x, y, borrow);
    *x = t.0;
    t.1
}

// MULTIPLICATION

/// Multiply two digits (with carry) (and return the overflow contribution).
///
/// Returns the (low, high) components.
#[inline]
pub fn mul(x: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
    // Cannot overflow, as long as wide is 2x as wide. This is because
    // the following is always true:
    // `Wide::MAX - (Digit::MAX * Digit::MAX) >= Digit::MAX`
    let z: Wide = x as Wide * y as Wide + carry as Wide;
    (as_digit(z), as_digit(z >> BITS))
}

/// MulAssign with carry (and return the overflow contribution).
#[inline]
pub fn imul(x: &mut Digit, y: Digit, carry: Digit) -> Digit {
    let t = mul(*x, y, carry);
    *x = t.0;
    t.1
}

/// Multiply two digits, adding an accumulator digit and a carry.
///
/// `(2^32-1)^2 + 2 * (2^32-1) == 2^64 - 1`, so this cannot overflow either.
#[inline]
pub fn mul_add(x: Digit, y: Digit, acc: Digit, carry: Digit) -> (Digit, Digit) {
    let z: Wide = x as Wide * y as Wide + acc as Wide + carry as Wide;
    (as_digit(z), as_digit(z >> BITS))
}

// DIVISION

/// Divide the two-digit value `hi:lo` by `y`, returning (quotient, remainder).
///
/// Requires `hi < y`, so the quotient fits in a single digit.
#[inline]
pub fn div(hi: Digit, lo: Digit, y: Digit) -> (Digit, Digit) {
    debug_assert!(hi < y);
    let x = ((hi as Wide) << BITS) | lo as Wide;
    let y = y as Wide;
    (as_digit(x / y), as_digit(x % y))
}

}   // scalar

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
use super::*;

// ADDITION

/// Implied AddAssign implementation for adding a small integer to bigint.
///
/// Allows us to choose a start-index in x to store, to allow incrementing
/// from a non-zero start.
#[inline]
pub fn iadd_impl(x: &mut DigitVec, y: Digit, xstart: usize) {
    if x.len() <= xstart {
        resize(x, xstart, 0);
        push(x, y);
    } else {
        // Initial add
        let mut carry = scalar::iadd(&mut x[xstart], y, false);

        // Increment until overflow stops occurring.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::iadd(&mut x[size], 0, true);
            size += 1;
        }

        // If we overflowed the buffer entirely, need to add 1 to the end
        // of the buffer.
        if carry {
            push(x, 1);
        }
    }
}

/// AddAssign small integer to bigint.
#[inline]
pub fn iadd(x: &mut DigitVec, y: Digit) {
    iadd_impl(x, y, 0);
}

// MULTIPLICATION

/// MulAssign small integer to bigint.
#[inline]
pub fn imul(x: &mut DigitVec, y: Digit) {
    // Multiply iteratively over all elements, adding the carry each time.
    let mut carry: Digit = 0;
    for xi in x.iter_mut() {
        carry = scalar::imul(xi, y, carry);
    }

    // Overflow of value, add to end.
    if carry != 0 {
        push(x, carry);
    }
    normalize(x);
}

/// Mul small integer to bigint.
#[inline]
pub fn mul(x: &[Digit], y: Digit) -> DigitVec {
    let mut z = DigitVec::new();
    reserve(&mut z, x.len() + 1);
    z.extend_from_slice(x);
    imul(&mut z, y);
    z
}

// DIVISION

/// DivAssign small integer to bigint, returning the remainder.
///
/// Walks from the most significant digit down, so every digit is read
/// before its quotient digit overwrites it.
#[inline]
pub fn idiv(x: &mut DigitVec, y: Digit) -> Digit {
    debug_assert!(y != 0);
    let mut rem: Digit = 0;
    for xi in x.iter_mut().rev() {
        let (q, r) = scalar::div(rem, *xi, y);
        *xi = q;
        rem = r;
    }
    normalize(x);
    rem
}

/// Div small integer to bigint, returning (quotient, remainder).
#[inline]
pub fn div(x: &[Digit], y: Digit) -> (DigitVec, Digit) {
    let mut z = DigitVec::new();
    reserve(&mut z, x.len());
    z.extend_from_slice(x);
    let rem = idiv(&mut z, y);
    (z, rem)
}

// NORMALIZE

/// Normalize the container by popping any leading zeros, keeping at least
/// one digit.
#[inline]
pub fn normalize(x: &mut DigitVec) {
    while x.len() > 1 && *x.rindex(0) == 0 {
        x.pop();
    }
}

}   // small

// LARGE
// -----

// Large-to-large operations, to modify a big integer from a big integer.

pub(crate) mod large {
use super::*;

// RELATIVE OPERATORS

/// Compare `x` to `y`, in little-endian order.
///
/// The shorter operand is treated as if padded with zero digits, so
/// unnormalized buffers compare by value.
#[inline]
pub fn compare(x: &[Digit], y: &[Digit]) -> cmp::Ordering {
    let len = x.len().max(y.len());
    for index in (0..len).rev() {
        let xi = get(x, index);
        let yi = get(y, index);
        if xi > yi {
            return cmp::Ordering::Greater;
        } else if xi < yi {
            return cmp::Ordering::Less;
        }
    }
    // Equal case.
    cmp::Ordering::Equal
}

/// Check if x is less than y.
#[inline]
pub fn less(x: &[Digit], y: &[Digit]) -> bool {
    compare(x, y) == cmp::Ordering::Less
}

/// Check if x is greater than or equal to y.
#[inline]
pub fn greater_equal(x: &[Digit], y: &[Digit]) -> bool {
    !less(x, y)
}

// ADDITION

/// AddAssign bigint to bigint.
pub fn iadd(x: &mut DigitVec, y: &[Digit]) {
    // If the effective y buffer is longer, need to resize to that.
    if y.len() > x.len() {
        reserve(x, y.len() + 1);
        resize(x, y.len(), 0);
    }

    // Iteratively add elements from y to x, storing the carry for the next.
    let mut carry = false;
    for (xi, yi) in x.iter_mut().zip(y.iter()) {
        carry = scalar::iadd(xi, *yi, carry);
    }

    // Overflow from the previous digit.
    if carry {
        small::iadd_impl(x, 1, y.len());
    }
}

/// Add bigint to bigint.
#[inline]
pub fn add(x: &[Digit], y: &[Digit]) -> DigitVec {
    let mut z = DigitVec::new();
    reserve(&mut z, x.len().max(y.len()) + 1);
    z.extend_from_slice(x);
    iadd(&mut z, y);
    z
}

// SUBTRACTION

/// SubAssign inside a fixed window, without normalizing.
///
/// Returns the final borrow, which is false whenever `x >= y`.
#[inline]
pub fn isub_window(x: &mut [Digit], y: &[Digit]) -> bool {
    let mut borrow = false;
    for (index, xi) in x.iter_mut().enumerate() {
        if index >= y.len() && !borrow {
            break;
        }
        borrow = scalar::isub(xi, get(y, index), borrow);
    }
    borrow
}

/// SubAssign bigint to bigint.
pub fn isub(x: &mut DigitVec, y: &[Digit]) {
    // Basic underflow checks.
    debug_assert!(greater_equal(x, y));

    let borrow = isub_window(x, y);
    debug_assert!(!borrow);
    small::normalize(x);
}

/// Reverse SubAssign bigint to bigint, `x = y - x`.
///
/// Each digit of `x` is read before the difference is written over it.
pub fn irsub(x: &mut DigitVec, y: &[Digit]) {
    // Basic underflow checks.
    debug_assert!(greater_equal(y, x));

    if y.len() > x.len() {
        resize(x, y.len(), 0);
    }

    let mut borrow = false;
    for (index, xi) in x.iter_mut().enumerate() {
        let (diff, b) = scalar::sub(get(y, index), *xi, borrow);
        *xi = diff;
        borrow = b;
    }
    debug_assert!(!borrow);
    small::normalize(x);
}

/// Sub bigint from bigint.
#[inline]
pub fn sub(x: &[Digit], y: &[Digit]) -> DigitVec {
    let mut z = DigitVec::new();
    reserve(&mut z, x.len());
    z.extend_from_slice(x);
    isub(&mut z, y);
    z
}

// MULTIPLICATION

/// Grade-school multiplication algorithm.
///
/// Each of the `x.len()` rows multiplies `y` by one digit of `x`, and
/// accumulates the partial products into the result with carry. O(n*m).
pub fn long_mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    let size = x.len() + y.len();
    let mut z = DigitVec::new();
    resize(&mut z, size, 0);

    for (i, &xi) in x.iter().enumerate() {
        let mut carry: Digit = 0;
        for (j, &yj) in y.iter().enumerate() {
            let (lo, hi) = scalar::mul_add(xi, yj, z[i + j], carry);
            z[i + j] = lo;
            carry = hi;
        }
        // Previous rows only reach `i + y.len() - 1`, this slot is still 0.
        z[i + y.len()] = carry;
    }

    small::normalize(&mut z);
    z
}

/// MulAssign bigint to bigint.
///
/// The product is built in a scratch buffer and then replaces `x`.
#[inline]
pub fn imul(x: &mut DigitVec, y: &[Digit]) {
    if y.len() == 1 {
        small::imul(x, y[0]);
    } else {
        *x = long_mul(x, y);
    }
}

/// Mul bigint to bigint.
#[inline]
pub fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    long_mul(x, y)
}

// DIVISION

/// Divide bigint by bigint, returning (quotient, remainder).
///
/// Uses Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) when `y` has more than one
/// digit. Both operands must be normalized and `y` must be nonzero.
pub fn div_rem(x: &[Digit], y: &[Digit]) -> (DigitVec, DigitVec) {
    debug_assert!(!y.is_empty() && *y.rindex(0) != 0);

    if less(x, y) {
        let mut rem = DigitVec::new();
        reserve(&mut rem, x.len());
        rem.extend_from_slice(x);
        return (vec_of(0), rem);
    }

    if y.len() == 1 {
        let (quo, rem) = small::div(x, y[0]);
        return (quo, vec_of(rem));
    }

    let span = tracing::trace_span!("long_division", dividend = x.len(), divisor = y.len());
    let _enter = span.enter();

    let m = x.len();
    let n = y.len();

    // Scale both operands so the divisor's top digit is at least BASE/2,
    // which bounds the trial quotient error to one.
    let d = as_digit(BASE / (*y.rindex(0) as Wide + 1));
    let mut u = small::mul(x, d);
    if u.len() == m {
        push(&mut u, 0);
    }
    debug_assert!(u.len() == m + 1);

    let v = small::mul(y, d);
    debug_assert!(v.len() == n);
    let v_top = v[n - 1] as Wide;
    let v_next = v[n - 2] as Wide;
    debug_assert!(v_top >= BASE / 2);

    let k = m - n;
    let mut quo = DigitVec::new();
    resize(&mut quo, k + 1, 0);

    let mut qv = DigitVec::new();
    reserve(&mut qv, n + 1);

    for j in (0..=k).rev() {
        let window = &mut u[j..j + n + 1];
        let top = window[n] as Wide;
        let next = window[n - 1] as Wide;

        // Trial quotient from the top two digits of the window.
        let (mut qh, mut rh) = if top == v_top {
            (BASE - 1, top + next)
        } else {
            let num = top * BASE + next;
            (num / v_top, num % v_top)
        };

        while rh < BASE && qh * v_next > BASE * rh + window[n - 2] as Wide {
            qh -= 1;
            rh += v_top;
        }

        // Multiply and subtract, correcting once if the estimate is high.
        qv.clear();
        qv.extend_from_slice(&v);
        small::imul(&mut qv, as_digit(qh));
        if less(window, &qv) {
            qh -= 1;
            isub(&mut qv, &v);
        }
        debug_assert!(greater_equal(window, &qv));

        let borrow = isub_window(window, &qv);
        debug_assert!(!borrow);
        quo[j] = as_digit(qh);
    }

    small::normalize(&mut quo);

    // Undo the scaling, the division is exact.
    small::normalize(&mut u);
    let rem = small::idiv(&mut u, d);
    debug_assert!(rem == 0);

    (quo, u)
}

/// Single-digit buffer.
#[inline]
fn vec_of(x: Digit) -> DigitVec {
    let mut z = DigitVec::new();
    push(&mut z, x);
    z
}

}   // large

// TESTS
// -----
