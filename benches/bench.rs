#![feature(test)]

extern crate test;

use bigmath::{radix, Integer, Natural};
use test::Bencher;

// 1000 decimal digits.
fn input_decimal() -> String {
    "1234567890".repeat(100)
}

fn input_natural(len: usize) -> Natural {
    let digits = (0..len as u32)
        .map(|i| i.wrapping_mul(0x9E37_79B9) | 1)
        .collect();
    Natural::from_digits(digits)
}

#[bench]
fn bench_parse_decimal(b: &mut Bencher) {
    let s = input_decimal();
    b.bytes = s.len() as u64;
    b.iter(|| {
        radix::parse(&s, 10).unwrap();
    });
}

#[bench]
fn bench_format_decimal(b: &mut Bencher) {
    let x = radix::parse(&input_decimal(), 10).unwrap();
    b.iter(|| {
        radix::format(&x, 10).unwrap();
    });
}

#[bench]
fn bench_format_hex(b: &mut Bencher) {
    let x = Integer::from(input_natural(100));
    b.iter(|| {
        radix::format(&x, 16).unwrap();
    });
}

#[bench]
fn bench_mul_100x100(b: &mut Bencher) {
    let x = input_natural(100);
    let y = input_natural(100);
    b.iter(|| x.mul(&y));
}

#[bench]
fn bench_div_rem_200x100(b: &mut Bencher) {
    let x = input_natural(200);
    let y = input_natural(100);
    b.iter(|| x.div_rem(&y));
}

#[bench]
fn bench_add_assign(b: &mut Bencher) {
    let y = Integer::from(input_natural(100));
    b.iter(|| {
        let mut x = Integer::from(-1);
        x += &y;
        x
    });
}
