use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{FilterError, Result};

/// Closed integer interval `[left, right]` outside which a filter is zero
///
/// Always non-empty: `left <= right` is checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportInterval {
    left: isize,
    right: isize,
}

impl SupportInterval {
    /// Create a support interval
    ///
    /// # Errors
    /// Returns `FilterError::InvalidFilter` if `left > right`
    pub fn new(left: isize, right: isize) -> Result<Self> {
        if left > right {
            return Err(FilterError::InvalidFilter(format!(
                "support bounds out of order: [{}, {}]",
                left, right
            )));
        }
        Ok(Self { left, right })
    }

    /// Support of `len` consecutive coefficients starting at `left`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidFilter` if `len` is zero
    pub fn with_len(left: isize, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(FilterError::InvalidFilter(
                "support must hold at least one coefficient".to_string(),
            ));
        }
        Self::new(left, left + len as isize - 1)
    }

    /// Bounds already known to be ordered
    pub(crate) fn from_bounds(left: isize, right: isize) -> Self {
        debug_assert!(left <= right);
        Self { left, right }
    }

    pub fn left(&self) -> isize {
        self.left
    }

    pub fn right(&self) -> isize {
        self.right
    }

    /// Number of integer positions in the interval (`right - left + 1`)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.right - self.left + 1) as usize
    }

    pub fn contains(&self, index: isize) -> bool {
        self.left <= index && index <= self.right
    }

    /// Storage offset of `index`, or `None` when it lies outside the interval
    pub fn offset_of(&self, index: isize) -> Option<usize> {
        if self.contains(index) {
            Some((index - self.left) as usize)
        } else {
            None
        }
    }

    pub fn is_subset_of(&self, other: &SupportInterval) -> bool {
        other.left <= self.left && self.right <= other.right
    }

    /// All integer positions in ascending order
    pub fn indices(&self) -> RangeInclusive<isize> {
        self.left..=self.right
    }
}

impl fmt::Display for SupportInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_len_and_bounds() {
        let support = SupportInterval::new(-3, 4).unwrap();
        assert_eq!(support.left(), -3);
        assert_eq!(support.right(), 4);
        assert_eq!(support.len(), 8);
    }

    #[test]
    fn test_single_point_support() {
        let support = SupportInterval::new(0, 0).unwrap();
        assert_eq!(support.len(), 1);
        assert!(support.contains(0));
        assert!(!support.contains(1));
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let result = SupportInterval::new(2, 1);
        assert!(matches!(result, Err(FilterError::InvalidFilter(_))));
    }

    #[test]
    fn test_with_len() {
        let support = SupportInterval::with_len(-5, 6).unwrap();
        assert_eq!(support, SupportInterval::new(-5, 0).unwrap());
        assert!(SupportInterval::with_len(0, 0).is_err());
    }

    #[test]
    fn test_offset_of() {
        let support = SupportInterval::new(-1, 2).unwrap();
        assert_eq!(support.offset_of(-1), Some(0));
        assert_eq!(support.offset_of(2), Some(3));
        assert_eq!(support.offset_of(-2), None);
        assert_eq!(support.offset_of(3), None);
    }

    #[test]
    fn test_subset() {
        let outer = SupportInterval::new(0, 7).unwrap();
        assert!(SupportInterval::new(0, 4).unwrap().is_subset_of(&outer));
        assert!(outer.is_subset_of(&outer));
        assert!(!SupportInterval::new(-1, 4).unwrap().is_subset_of(&outer));
    }

    #[test]
    fn test_indices_and_display() {
        let support = SupportInterval::new(-2, 1).unwrap();
        let indices: Vec<isize> = support.indices().collect();
        assert_eq!(indices, vec![-2, -1, 0, 1]);
        assert_eq!(support.to_string(), "[-2, 1]");
    }
}
