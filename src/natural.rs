//! Unsigned arbitrary-precision magnitudes.

use crate::error::{Error, Result};
use crate::lib::{cmp, fmt, Vec};
use crate::math::*;
use crate::radix;

/// An unsigned integer of arbitrary size.
///
/// Stored as little-endian base 2<sup>32</sup> [`Digit`]s. A `Natural` always
/// holds at least one digit, and its most significant digit is nonzero unless
/// the value is zero.
///
/// Methods come in pairs: `add` computes a new value, `add_assign` overwrites
/// `self` with the result and reuses its storage.
///
/// ```
/// use bigmath::Natural;
///
/// let a = Natural::from(u64::MAX);
/// let b = a.add_small(1);
/// assert_eq!(b.digits(), &[0, 0, 1]);
///
/// let (q, r) = b.div_rem(&a);
/// assert_eq!(q, Natural::from(1u32));
/// assert_eq!(r, Natural::from(1u32));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Natural {
    /// Internal storage for the Natural, in little-endian order.
    digits: DigitVec,
}

impl Default for Natural {
    fn default() -> Self {
        Natural::zero()
    }
}

#[allow(clippy::should_implement_trait)]
impl Natural {
    /// The value zero.
    pub fn zero() -> Self {
        Natural::from_small(0)
    }

    /// The value one.
    pub fn one() -> Self {
        Natural::from_small(1)
    }

    #[inline]
    fn from_small(x: Digit) -> Self {
        let mut digits = DigitVec::new();
        reserve(&mut digits, 2);
        digits.push(x);
        Natural { digits }
    }

    #[inline]
    pub(crate) fn from_vec(mut digits: DigitVec) -> Self {
        if digits.is_empty() {
            digits.push(0);
        }
        small::normalize(&mut digits);
        Natural { digits }
    }

    /// Create a natural from little-endian digits.
    ///
    /// Leading zero digits are removed, and an empty vector is zero.
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        Natural::from_vec(digits)
    }

    /// The little-endian digits of the value.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits, at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Number of digits the storage can hold before reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.digits.capacity()
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.is_nonzero()
    }

    /// Returns true if any digit is nonzero.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        nonzero(&self.digits)
    }

    /// Returns the value as `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match *self.digits {
            [lo] => Some(lo as u64),
            [lo, hi] => Some(((hi as u64) << BITS) | lo as u64),
            _ => None,
        }
    }

    // CAPACITY

    /// Grow the storage so it can hold at least `capacity` digits.
    ///
    /// Capacity grows by half at a time, so repeated small growth does not
    /// reallocate every time. Never shrinks, and keeps the current digits.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        reserve(&mut self.digits, capacity);
    }

    /// Like [`ensure_capacity`](Self::ensure_capacity), but reports allocation
    /// failure as an error instead of aborting.
    pub fn try_ensure_capacity(&mut self, capacity: usize) -> Result<()> {
        try_reserve(&mut self.digits, capacity)?;
        Ok(())
    }

    // ADDITION

    /// Returns `self + other`.
    pub fn add(&self, other: &Natural) -> Natural {
        Natural {
            digits: large::add(&self.digits, &other.digits),
        }
    }

    /// Sets `self` to `self + other`.
    pub fn add_assign(&mut self, other: &Natural) {
        large::iadd(&mut self.digits, &other.digits);
    }

    /// Returns `self + y` for a single digit `y`.
    pub fn add_small(&self, y: Digit) -> Natural {
        let mut z = self.clone();
        z.add_small_assign(y);
        z
    }

    /// Sets `self` to `self + y` for a single digit `y`.
    pub fn add_small_assign(&mut self, y: Digit) {
        small::iadd(&mut self.digits, y);
    }

    // SUBTRACTION

    /// Returns `self - other`.
    ///
    /// `self` must be at least `other`. This is checked in debug builds only;
    /// in release builds the result is unspecified.
    pub fn sub(&self, other: &Natural) -> Natural {
        Natural {
            digits: large::sub(&self.digits, &other.digits),
        }
    }

    /// Sets `self` to `self - other`. Same precondition as [`sub`](Self::sub).
    pub fn sub_assign(&mut self, other: &Natural) {
        large::isub(&mut self.digits, &other.digits);
    }

    /// Sets `self` to `other - self`.
    ///
    /// `other` must be at least `self`. This is checked in debug builds only.
    pub fn rsub_assign(&mut self, other: &Natural) {
        large::irsub(&mut self.digits, &other.digits);
    }

    // MULTIPLICATION

    /// Returns `self * other`, by schoolbook multiplication.
    pub fn mul(&self, other: &Natural) -> Natural {
        Natural {
            digits: large::mul(&self.digits, &other.digits),
        }
    }

    /// Sets `self` to `self * other`.
    pub fn mul_assign(&mut self, other: &Natural) {
        large::imul(&mut self.digits, &other.digits);
    }

    /// Returns `self * y` for a single digit `y`.
    pub fn mul_small(&self, y: Digit) -> Natural {
        Natural {
            digits: small::mul(&self.digits, y),
        }
    }

    /// Sets `self` to `self * y` for a single digit `y`.
    pub fn mul_small_assign(&mut self, y: Digit) {
        small::imul(&mut self.digits, y);
    }

    // DIVISION

    /// Returns the quotient and remainder of `self / y` for a single digit
    /// `y`.
    ///
    /// `y` must be nonzero. This is checked in debug builds only.
    pub fn div_rem_small(&self, y: Digit) -> (Natural, Digit) {
        let (quo, rem) = small::div(&self.digits, y);
        (Natural { digits: quo }, rem)
    }

    /// Sets `self` to `self / y` and returns the remainder. Same precondition
    /// as [`div_rem_small`](Self::div_rem_small).
    pub fn div_small_assign(&mut self, y: Digit) -> Digit {
        small::idiv(&mut self.digits, y)
    }

    /// Returns the quotient and remainder of `self / other`.
    ///
    /// Multi-digit divisors use Knuth's Algorithm D. `other` must be nonzero.
    /// This is checked in debug builds only; use
    /// [`checked_div_rem`](Self::checked_div_rem) for divisors that may be
    /// zero.
    pub fn div_rem(&self, other: &Natural) -> (Natural, Natural) {
        let (quo, rem) = large::div_rem(&self.digits, &other.digits);
        (Natural { digits: quo }, Natural { digits: rem })
    }

    /// Returns the quotient and remainder of `self / other`, or an error if
    /// `other` is zero.
    pub fn checked_div_rem(&self, other: &Natural) -> Result<(Natural, Natural)> {
        if other.is_zero() {
            tracing::trace!("rejected natural division by zero");
            return Err(Error::division_by_zero());
        }
        Ok(self.div_rem(other))
    }
}

impl Ord for Natural {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        large::compare(&self.digits, &other.digits)
    }
}

impl PartialOrd for Natural {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u32> for Natural {
    fn from(x: u32) -> Self {
        Natural::from_small(x)
    }
}

impl From<u64> for Natural {
    fn from(x: u64) -> Self {
        let mut digits = DigitVec::new();
        reserve(&mut digits, 2);
        digits.extend_from_slice(&split_u64(x));
        Natural::from_vec(digits)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&radix::format_natural(self, 10))
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Natural({})", self)
    }
}
