//! Helpers to convert between characters and radix digits.

/// Uppercase digit characters, indexed by digit value.
const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest and largest supported radix.
pub(crate) const MIN_RADIX: u32 = 2;
pub(crate) const MAX_RADIX: u32 = 36;

// Check the radix is in `MIN_RADIX..=MAX_RADIX`.
#[inline]
pub(crate) fn is_valid_radix(radix: u32) -> bool {
    (MIN_RADIX..=MAX_RADIX).contains(&radix)
}

// Convert char to its digit value, case-insensitively, regardless of radix.
#[inline]
pub(crate) fn to_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

// Convert char to digit, if it is one in `radix`.
#[inline]
pub(crate) fn to_digit(c: char, radix: u32) -> Option<u32> {
    to_value(c).filter(|&value| value < radix)
}

// Convert digit to its uppercase character.
#[inline]
pub(crate) fn to_char(digit: u32) -> u8 {
    debug_assert!(digit < MAX_RADIX);
    DIGITS[digit as usize]
}
