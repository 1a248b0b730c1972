//! Reverse indexing over little-endian digit buffers.

use crate::lib::Vec;

// SLICE

/// Trait for generic slices.
pub trait Slice<T> {
    // AS SLICE

    /// Get slice of immutable elements.
    fn as_slice(&self) -> &[T];

    // RINDEX

    /// Get element from the back, so `rindex(0)` is the last element, which
    /// for a little-endian digit buffer is the most significant digit.
    #[inline]
    fn rindex(&self, index: usize) -> &T {
        let slc = self.as_slice();
        &slc[slc.len() - index - 1]
    }
}

impl<T> Slice<T> for [T] {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Slice<T> for Vec<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rindex_test() {
        let x = vec![1u32, 2, 3];
        assert_eq!(*x.rindex(0), 3);
        assert_eq!(*x.rindex(2), 1);
        assert_eq!(*x.as_slice().rindex(1), 2);
    }
}
