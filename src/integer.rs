//! Signed arbitrary-precision integers.

use crate::error::{Error, Result};
use crate::lib::{cmp, fmt, str::FromStr, String};
use crate::natural::Natural;
use crate::radix;

/// A signed integer of arbitrary size.
///
/// Represented as a [`Natural`] magnitude and a sign flag. Zero is always
/// stored as positive, so equal values have equal representations and hash
/// identically.
///
/// ```
/// use bigmath::Integer;
///
/// let two_pow_64 = Integer::from_str_radix("18446744073709551616", 10).unwrap();
/// let next = two_pow_64 + Integer::from(1);
/// assert_eq!(next.to_string(), "18446744073709551617");
///
/// let (q, r) = Integer::from(-7).div_mod(&Integer::from(2)).unwrap();
/// assert_eq!((q, r), (Integer::from(-4), Integer::from(1)));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    magnitude: Natural,
    positive: bool,
}

/// Read-only view of a magnitude with a sign of its own.
///
/// Negating a view flips only the view's flag; the borrowed digits and the
/// sign of the integer they came from are never touched.
#[derive(Clone, Copy)]
pub(crate) struct SignedRef<'a> {
    magnitude: &'a Natural,
    positive: bool,
}

impl<'a> SignedRef<'a> {
    #[inline]
    pub(crate) fn of(value: &'a Integer) -> Self {
        SignedRef {
            magnitude: &value.magnitude,
            positive: value.positive,
        }
    }

    #[inline]
    pub(crate) fn negate(self) -> Self {
        SignedRef {
            magnitude: self.magnitude,
            positive: !self.positive,
        }
    }

    /// Sign with zero treated as positive, whatever its flag says.
    #[inline]
    fn is_nonnegative(&self) -> bool {
        self.positive || self.magnitude.is_zero()
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::zero()
    }
}

impl Integer {
    /// The value zero.
    pub fn zero() -> Self {
        Integer {
            magnitude: Natural::zero(),
            positive: true,
        }
    }

    /// Build an integer from a magnitude and a sign.
    ///
    /// A zero magnitude always produces positive zero, whatever `positive`
    /// says.
    pub fn from_parts(magnitude: Natural, positive: bool) -> Self {
        let mut value = Integer {
            magnitude,
            positive,
        };
        value.canonicalize();
        value
    }

    /// Split into magnitude and sign.
    pub fn into_parts(self) -> (Natural, bool) {
        (self.magnitude, self.positive)
    }

    /// The absolute value.
    #[inline]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// Returns the sign flag: true for positive numbers and zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Returns true for numbers below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns the sign as an ordering against zero.
    pub fn signum(&self) -> cmp::Ordering {
        if self.is_zero() {
            cmp::Ordering::Equal
        } else if self.positive {
            cmp::Ordering::Greater
        } else {
            cmp::Ordering::Less
        }
    }

    /// Returns the value as `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let abs = self.magnitude.to_u64()?;
        if self.positive {
            i64::try_from(abs).ok()
        } else if abs <= i64::MIN.unsigned_abs() {
            Some(0i64.wrapping_sub(abs as i64))
        } else {
            None
        }
    }

    /// Parse a string in the given radix.
    ///
    /// See [`radix::parse`] for the accepted syntax.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        radix::parse(s, radix)
    }

    /// Format in the given radix, using uppercase letters for digits above 9.
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        radix::format(self, radix)
    }

    /// Returns the quotient and remainder of `self / rhs`.
    ///
    /// The pair satisfies `quotient * rhs + remainder == self` with
    /// `0 <= remainder < |rhs|`: when `rhs` is positive the quotient is
    /// rounded toward negative infinity.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorCode::DivisionByZero`](crate::error::ErrorCode)
    /// when `rhs` is zero.
    pub fn div_mod(&self, rhs: &Integer) -> Result<(Integer, Integer)> {
        div_mod_signed(self.view(), rhs.view())
    }

    /// The quotient of [`div_mod`](Self::div_mod).
    pub fn quotient(&self, rhs: &Integer) -> Result<Integer> {
        self.div_mod(rhs).map(|(quo, _)| quo)
    }

    /// The remainder of [`div_mod`](Self::div_mod), never negative.
    pub fn modulo(&self, rhs: &Integer) -> Result<Integer> {
        self.div_mod(rhs).map(|(_, rem)| rem)
    }

    #[inline]
    pub(crate) fn view(&self) -> SignedRef {
        SignedRef::of(self)
    }

    #[inline]
    fn from_view(value: SignedRef) -> Self {
        Integer::from_parts(value.magnitude.clone(), value.positive)
    }

    /// Force zero to be positive. Every public result passes through here.
    #[inline]
    fn canonicalize(&mut self) {
        if self.magnitude.is_zero() {
            self.positive = true;
        }
    }

    /// Flip the sign of an owned value in place.
    #[inline]
    pub(crate) fn negate_assign(&mut self) {
        self.positive = !self.positive;
        self.canonicalize();
    }

    /// Sets `self` to `self + rhs`.
    pub(crate) fn add_signed_assign(&mut self, rhs: SignedRef) {
        if self.positive == rhs.positive {
            self.magnitude.add_assign(rhs.magnitude);
        } else if self.magnitude >= *rhs.magnitude {
            self.magnitude.sub_assign(rhs.magnitude);
        } else {
            self.magnitude.rsub_assign(rhs.magnitude);
            self.positive = rhs.positive;
        }
        self.canonicalize();
    }

    /// Sets `self` to `self * rhs`.
    pub(crate) fn mul_signed_assign(&mut self, rhs: SignedRef) {
        self.magnitude.mul_assign(rhs.magnitude);
        self.positive = self.positive == rhs.positive;
        self.canonicalize();
    }
}

/// Returns `lhs + rhs`.
pub(crate) fn add_signed(lhs: SignedRef, rhs: SignedRef) -> Integer {
    let mut sum = Integer::from_view(lhs);
    sum.add_signed_assign(rhs);
    sum
}

/// Returns `lhs - rhs`, as `lhs` plus the negated view of `rhs`.
pub(crate) fn sub_signed(lhs: SignedRef, rhs: SignedRef) -> Integer {
    add_signed(lhs, rhs.negate())
}

/// Returns `lhs * rhs`.
pub(crate) fn mul_signed(lhs: SignedRef, rhs: SignedRef) -> Integer {
    Integer::from_parts(
        lhs.magnitude.mul(rhs.magnitude),
        lhs.positive == rhs.positive,
    )
}

fn div_mod_signed(lhs: SignedRef, rhs: SignedRef) -> Result<(Integer, Integer)> {
    if rhs.magnitude.is_zero() {
        tracing::trace!("rejected integer division by zero");
        return Err(Error::division_by_zero());
    }

    if !rhs.positive {
        let (mut quo, rem) = div_mod_signed(lhs, rhs.negate())?;
        quo.negate_assign();
        return Ok((quo, rem));
    }

    let (mut quo, mut rem) = lhs.magnitude.div_rem(rhs.magnitude);

    // Truncating division of |lhs|; a negative dividend with a remainder
    // rounds one further down and takes the complementary remainder.
    let negative = !lhs.is_nonnegative();
    if negative && rem.is_nonzero() {
        quo.add_small_assign(1);
        rem.rsub_assign(rhs.magnitude);
    }

    Ok((
        Integer::from_parts(quo, !negative),
        Integer::from_parts(rem, true),
    ))
}

fn compare_signed(lhs: SignedRef, rhs: SignedRef) -> cmp::Ordering {
    match (lhs.is_nonnegative(), rhs.is_nonnegative()) {
        (true, true) => lhs.magnitude.cmp(rhs.magnitude),
        (true, false) => cmp::Ordering::Greater,
        (false, true) => cmp::Ordering::Less,
        (false, false) => rhs.magnitude.cmp(lhs.magnitude),
    }
}

impl Ord for Integer {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        compare_signed(self.view(), other.view())
    }
}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Natural> for Integer {
    fn from(magnitude: Natural) -> Self {
        Integer {
            magnitude,
            positive: true,
        }
    }
}

impl From<i64> for Integer {
    fn from(x: i64) -> Self {
        // `unsigned_abs` is exact for i64::MIN, whose negation overflows.
        Integer::from_parts(Natural::from(x.unsigned_abs()), x >= 0)
    }
}

impl From<i32> for Integer {
    fn from(x: i32) -> Self {
        Integer::from(x as i64)
    }
}

impl From<u64> for Integer {
    fn from(x: u64) -> Self {
        Integer::from(Natural::from(x))
    }
}

impl From<u32> for Integer {
    fn from(x: u32) -> Self {
        Integer::from(Natural::from(x))
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        radix::parse(s, 10)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&self.magnitude, f)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Integer({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(x: i64) -> Integer {
        Integer::from(x)
    }

    #[test]
    fn canonical_zero_test() {
        let zero = Integer::from_parts(Natural::zero(), false);
        assert!(zero.is_positive());
        assert_eq!(zero, Integer::zero());

        let mut x = int(0);
        x.negate_assign();
        assert!(x.is_positive());

        let diff = sub_signed(int(5).view(), int(5).view());
        assert!(diff.is_positive());
        assert!(diff.is_zero());

        let product = mul_signed(int(-5).view(), int(0).view());
        assert!(product.is_positive());
    }

    #[test]
    fn negated_view_test() {
        let x = int(9);
        let view = x.view().negate();
        assert!(!view.positive);
        // The owner is untouched.
        assert!(x.is_positive());
        assert_eq!(add_signed(x.view(), view), Integer::zero());
    }

    #[test]
    fn compare_signed_zero_test() {
        // A zero view with a negative flag still compares equal to zero.
        let zero = Integer::zero();
        let negative_zero = zero.view().negate();
        assert_eq!(compare_signed(negative_zero, zero.view()), cmp::Ordering::Equal);
        assert_eq!(compare_signed(negative_zero, int(-1).view()), cmp::Ordering::Greater);
        assert_eq!(compare_signed(negative_zero, int(1).view()), cmp::Ordering::Less);
    }

    #[test]
    fn add_signed_assign_test() {
        let mut x = int(-10);
        x.add_signed_assign(int(3).view());
        assert_eq!(x, int(-7));

        x.add_signed_assign(int(20).view());
        assert_eq!(x, int(13));

        x.add_signed_assign(int(-13).view());
        assert_eq!(x, Integer::zero());
        assert!(x.is_positive());
    }

    #[test]
    fn div_mod_signs_test() {
        let cases = [
            (7, 2, 3, 1),
            (-7, 2, -4, 1),
            (7, -2, -3, 1),
            (-7, -2, 4, 1),
            (-6, 2, -3, 0),
            (6, -2, -3, 0),
            (0, -5, 0, 0),
        ];
        for &(a, b, q, r) in &cases {
            let (quo, rem) = int(a).div_mod(&int(b)).unwrap();
            assert_eq!((quo, rem), (int(q), int(r)), "{} divmod {}", a, b);
        }
    }

    #[test]
    fn to_i64_test() {
        for &x in &[0, 1, -1, i64::MAX, i64::MIN, i64::MIN + 1] {
            assert_eq!(int(x).to_i64(), Some(x));
        }
        assert_eq!(Integer::from(u64::MAX).to_i64(), None);
        assert_eq!((-Integer::from(1u64 << 63)).to_i64(), Some(i64::MIN));
        assert_eq!((-Integer::from((1u64 << 63) + 1)).to_i64(), None);
    }
}
