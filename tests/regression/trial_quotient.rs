// Long division at the limits of the trial quotient estimate: the top digits
// of dividend and divisor are equal, or the remainder is one below the
// divisor.

use bigmath::Natural;

fn check(dividend: Vec<u32>, divisor: Vec<u32>) {
    let a = Natural::from_digits(dividend);
    let b = Natural::from_digits(divisor);
    let (q, r) = a.div_rem(&b);
    assert!(r < b);
    assert_eq!(q.mul(&b).add(&r), a);
}

#[test]
fn top_digits_equal() {
    check(vec![0, 0xFFFF_FFFE, 0x8000_0000], vec![0xFFFF_FFFF, 0x8000_0000]);
    check(vec![0, 0, 0x8000_0000, 0x7FFF_FFFF], vec![1, 0, 0x8000_0000]);
    check(vec![3, 0, 0x8000_0000], vec![1, 0, 0x2000_0000]);
}

#[test]
fn remainder_one_below_divisor() {
    // (b * q) + (b - 1) for a divisor with a maximal top digit.
    let b = Natural::from_digits(vec![0x1234_5678, 0xFFFF_FFFF, 0xFFFF_FFFF]);
    let q = Natural::from_digits(vec![0xFFFF_FFFF, 0xFFFF_FFFF]);
    let a = b.mul(&q).add(&b.sub(&Natural::one()));
    assert_eq!(a.div_rem(&b), (q, b.sub(&Natural::one())));
}

#[test]
fn dividend_shorter_than_divisor() {
    let a = Natural::from_digits(vec![5, 6]);
    let b = Natural::from_digits(vec![1, 2, 3]);
    assert_eq!(a.div_rem(&b), (Natural::zero(), a.clone()));
}
