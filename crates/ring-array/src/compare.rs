//! Comparisons that only exist when the element type is a primitive scalar.

use std::cmp::Ordering;

use crate::RingArray;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers, floats, `bool` and `char`.
///
/// Sealed: the comparisons below are not meant to be extended with user-defined orderings.
pub trait Arithmetic: sealed::Sealed + Copy + PartialOrd {}

macro_rules! impl_arithmetic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Arithmetic for $ty {}
        )*
    };
}

impl_arithmetic!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

impl<T: Arithmetic, const N: usize> RingArray<T, N> {
    /// Compatibility comparison over the raw storage.
    ///
    /// If the lengths differ the result is `self.len() - rhs.len()`. Otherwise every physical
    /// slot is scanned, in slot order rather than logical order: `0` means all slots match, and
    /// a mismatch at slot `i` yields `i + 1`, negated when `self`'s slot orders below `rhs`'s.
    ///
    /// Stale slots outside the live window take part in the scan, so two arrays with the same
    /// logical contents may compare unequal. New code should use [`Self::logical_cmp`].
    #[expect(
        clippy::cast_possible_wrap,
        reason = "lengths and slot indices are bounded by N, the length of an in-memory array"
    )]
    #[must_use]
    pub fn storage_cmp(&self, rhs: &Self) -> isize {
        if self.len != rhs.len {
            return self.len as isize - rhs.len as isize;
        }

        let Some(slot) = self
            .storage
            .iter()
            .zip(&rhs.storage)
            .position(|(lhs, rhs)| lhs != rhs)
        else {
            return 0;
        };

        let distance = slot as isize + 1;
        if self.storage[slot] < rhs.storage[slot] {
            -distance
        } else {
            distance
        }
    }

    /// Lexicographic comparison of the live elements, front to back.
    ///
    /// `None` only when a pair of elements is unordered, i.e. a float NaN.
    #[must_use]
    pub fn logical_cmp(&self, rhs: &Self) -> Option<Ordering> {
        for index in 0..self.len.min(rhs.len) {
            match self[index].partial_cmp(&rhs[index])? {
                Ordering::Equal => {}
                ordering => return Some(ordering),
            }
        }

        Some(self.len.cmp(&rhs.len))
    }
}

impl<T: Arithmetic, const N: usize> PartialEq for RingArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && (0..self.len).all(|index| self[index] == other[index])
    }
}

impl<T: Arithmetic, const N: usize> PartialOrd for RingArray<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.logical_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped() -> RingArray<i32, 3> {
        // physical [4, 2, 3], logical [2, 3, 4]
        let mut ring = RingArray::try_from([1, 2, 3]).unwrap();
        ring.push_back(4);
        ring
    }

    #[test]
    fn test_storage_cmp_length_difference() {
        let short = RingArray::<i32, 4>::try_from([1]).unwrap();
        let long = RingArray::<i32, 4>::try_from([9, 9, 9]).unwrap();

        assert_eq!(short.storage_cmp(&long), -2);
        assert_eq!(long.storage_cmp(&short), 2);
    }

    #[test]
    fn test_storage_cmp_equal() {
        let lhs = RingArray::<i32, 3>::try_from([1, 2, 3]).unwrap();
        let rhs = RingArray::<i32, 3>::try_from([1, 2, 3]).unwrap();
        assert_eq!(lhs.storage_cmp(&rhs), 0);
    }

    #[test]
    fn test_storage_cmp_mismatch_position() {
        let lhs = RingArray::<i32, 3>::try_from([1, 2, 3]).unwrap();
        let rhs = RingArray::<i32, 3>::try_from([1, 5, 3]).unwrap();

        assert_eq!(lhs.storage_cmp(&rhs), -2);
        assert_eq!(rhs.storage_cmp(&lhs), 2);
    }

    #[test]
    fn test_storage_cmp_is_physical() {
        let straight = RingArray::<i32, 3>::try_from([2, 3, 4]).unwrap();
        let wrapped = wrapped();

        assert_eq!(straight, wrapped);
        assert_ne!(straight.storage_cmp(&wrapped), 0);
    }

    #[test]
    fn test_storage_cmp_sees_stale_slots() {
        // physical [1, 9, 9], logical [1]
        let mut lhs = RingArray::<i32, 3>::try_from([9, 9, 9]).unwrap();
        lhs.clear();
        lhs.push_back(1);
        let rhs = RingArray::<i32, 3>::try_from([1]).unwrap();

        assert_eq!(lhs, rhs);
        assert_eq!(lhs.storage_cmp(&rhs), 2);
    }

    #[test]
    fn test_logical_cmp() {
        let lhs = RingArray::<i32, 4>::try_from([1, 2]).unwrap();
        let rhs = RingArray::<i32, 4>::try_from([1, 3]).unwrap();
        let prefix = RingArray::<i32, 4>::try_from([1]).unwrap();

        assert_eq!(lhs.logical_cmp(&rhs), Some(Ordering::Less));
        assert_eq!(rhs.logical_cmp(&lhs), Some(Ordering::Greater));
        assert_eq!(prefix.logical_cmp(&lhs), Some(Ordering::Less));
        assert_eq!(lhs.logical_cmp(&lhs), Some(Ordering::Equal));
        assert!(prefix < rhs);
    }

    #[test]
    fn test_logical_cmp_nan() {
        let lhs = RingArray::<f64, 2>::try_from([f64::NAN]).unwrap();
        let rhs = RingArray::<f64, 2>::try_from([1.0]).unwrap();

        let same = lhs;

        assert_eq!(lhs.logical_cmp(&rhs), None);
        assert_ne!(lhs, same);
    }
}
