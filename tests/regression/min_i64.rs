// The most negative i64 has no positive counterpart in i64, so its magnitude
// must be built without negating the native value.

use bigmath::Integer;

#[test]
fn from_min_i64() {
    let x = Integer::from(i64::MIN);
    assert!(x.is_negative());
    assert_eq!(x.magnitude().digits(), &[0, 0x8000_0000]);
    assert_eq!(x.to_string(), "-9223372036854775808");
    assert_eq!(x.to_i64(), Some(i64::MIN));
}

#[test]
fn negate_min_i64() {
    let x = -Integer::from(i64::MIN);
    assert_eq!(x.to_string(), "9223372036854775808");
    assert_eq!(x.to_i64(), None);
    assert_eq!(x + Integer::from(i64::MIN), Integer::zero());
}
