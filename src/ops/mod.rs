//! Operator overloads for [`Integer`].
//!
//! Every binary operator accepts owned and borrowed operands on either side.
//! An owned left operand is reused as the destination, so `a + &b` and
//! `a += &b` update the digits of `a` in place and only reallocate when the
//! result outgrows its capacity.
//!
//! ```
//! use bigmath::Integer;
//!
//! let a = Integer::from(-12);
//! let b = Integer::from(5);
//!
//! assert_eq!(&a + &b, Integer::from(-7));
//! assert_eq!(&a - &b, Integer::from(-17));
//! assert_eq!(&a * &b, Integer::from(-60));
//!
//! let mut c = a.clone();
//! c *= &a;
//! c -= b;
//! assert_eq!(c, Integer::from(139));
//! ```

use crate::integer::{add_signed, mul_signed, sub_signed, Integer};
use crate::lib::iter::{Product, Sum};
use crate::lib::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Negation flips the sign; zero stays positive.
impl Neg for Integer {
    type Output = Integer;
    fn neg(mut self) -> Integer {
        self.negate_assign();
        self
    }
}

impl<'a> Neg for &'a Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        -self.clone()
    }
}

impl Sum for Integer {
    fn sum<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(Integer::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Integer> for Integer {
    fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(Integer::zero(), |acc, x| acc + x)
    }
}

impl Product for Integer {
    fn product<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(Integer::from(1), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Integer> for Integer {
    fn product<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(Integer::from(1), |acc, x| acc * x)
    }
}

include!("overload_val.rs");
include!("overload_ref.rs");
