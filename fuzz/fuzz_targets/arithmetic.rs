#![no_main]

use bigmath::{Integer, Natural};
use libfuzzer_sys::fuzz_target;

fn integer(bytes: &[u8]) -> Integer {
    let digits = bytes
        .chunks(4)
        .map(|chunk| chunk.iter().rev().fold(0u32, |acc, &b| acc << 8 | u32::from(b)))
        .collect();
    let positive = bytes.first().map_or(true, |b| b & 1 == 0);
    Integer::from_parts(Natural::from_digits(digits), positive)
}

fuzz_target!(|data: &[u8]| {
    let (left, right) = data.split_at(data.len() / 2);
    let a = integer(left);
    let b = integer(right);

    assert_eq!(&(&a + &b) - &b, a);
    assert_eq!(&a * &b, &b * &a);

    match a.div_mod(&b) {
        Ok((q, r)) => {
            assert!(!r.is_negative());
            assert!(r.magnitude() < b.magnitude());
            assert_eq!(q * &b + r, a);
        }
        Err(err) => assert!(b.is_zero() && err.is_arithmetic()),
    }
});
