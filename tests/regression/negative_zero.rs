// A zero produced by any path must compare, hash and print as plain zero,
// never as "-0".

use bigmath::Integer;
use std::collections::HashSet;

#[test]
fn negative_zero_is_zero() {
    let zeros = vec![
        "-0".parse::<Integer>().unwrap(),
        -Integer::zero(),
        Integer::from(-9) + Integer::from(9),
        Integer::from(-9) * Integer::zero(),
        Integer::from(-9).modulo(&Integer::from(3)).unwrap(),
        Integer::from(2).quotient(&Integer::from(-5)).unwrap(),
    ];
    let mut set = HashSet::new();
    for zero in zeros {
        assert_eq!(zero.to_string(), "0");
        assert!(zero.is_positive());
        set.insert(zero);
    }
    assert_eq!(set.len(), 1);
}
