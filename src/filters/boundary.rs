use std::fmt;
use std::str::FromStr;

use crate::coefficients::{
    BoundaryRows, boundary_row_len, check_boundary_rows, raw_boundary_coefficients,
};
use crate::constants::{MAX_BOUNDARY_ORDER, MIN_BOUNDARY_ORDER};
use crate::error::{FilterError, Result};
use crate::filters::ScalingFilter;
use crate::support::SupportInterval;

/// Edge of the interval a boundary family belongs to
///
/// # Parsing formats
/// - `L`, `l`, `left` (any case)
/// - `R`, `r`, `right` (any case)
///
/// # Example
/// ```
/// use daubechies_filters::filters::Side;
///
/// let side: Side = "left".parse().unwrap();
/// assert_eq!(side, Side::Left);
/// assert!(Side::try_from('X').is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "L", alias = "l")]
    Left,
    #[serde(alias = "R", alias = "r")]
    Right,
}

impl Side {
    /// Single-character tag (`'L'` or `'R'`)
    pub fn tag(&self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

impl TryFrom<char> for Side {
    type Error = FilterError;

    fn try_from(tag: char) -> Result<Self> {
        match tag {
            'L' | 'l' => Ok(Side::Left),
            'R' | 'r' => Ok(Side::Right),
            other => Err(FilterError::InvalidSide(other.to_string())),
        }
    }
}

impl FromStr for Side {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Side::Left),
            "r" | "right" => Ok(Side::Right),
            _ => Err(FilterError::InvalidSide(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Boundary scaling filters for one edge and order
///
/// Member `k` (`0 <= k < p`) lives on `[0, p+k]` at the left edge and on
/// `[-(p+k), 0]` at the right edge. The family support is the union of all
/// members: `[0, 2p-1]` or `[-(2p-1), 0]`.
///
/// Each member carries its refinement row of `p + 2k + 1` values, stored on
/// `[0, p+2k]` (left) or `[-(p+2k), 0]` (right).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFilterFamily {
    side: Side,
    order: usize,
    support: SupportInterval,
    rows: BoundaryRows,
}

impl BoundaryFilterFamily {
    /// Look up the boundary family for `side` and `order`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidOrder` unless `2 <= order <= 8`, and
    /// `FilterError::InvalidFilter` if a tabulated row does not match the
    /// length its member support implies or the rows are not orthonormal
    pub fn new(side: Side, order: i32) -> Result<Self> {
        if !(MIN_BOUNDARY_ORDER..=MAX_BOUNDARY_ORDER).contains(&order) {
            return Err(FilterError::InvalidOrder {
                order,
                reason: format!(
                    "boundary filters are tabulated for orders {}..={}",
                    MIN_BOUNDARY_ORDER, MAX_BOUNDARY_ORDER
                ),
            });
        }
        let p = order as usize;

        let rows = raw_boundary_coefficients(side, p).ok_or_else(|| FilterError::InvalidOrder {
            order,
            reason: format!("no {} boundary table", side),
        })?;

        let reach = 2 * order as isize - 1;
        let support = match side {
            Side::Left => SupportInterval::new(0, reach)?,
            Side::Right => SupportInterval::new(-reach, 0)?,
        };

        let family = Self {
            side,
            order: p,
            support,
            rows,
        };
        family.check_members()?;

        log::debug!(
            "Built {} boundary family of order {} on {}",
            family.side,
            family.order,
            family.support
        );
        Ok(family)
    }

    /// Like [`BoundaryFilterFamily::new`] with the side given as a tag
    ///
    /// # Errors
    /// Returns `FilterError::InvalidSide` unless `tag` is `L` or `R`
    pub fn from_tag(tag: char, order: i32) -> Result<Self> {
        Self::new(Side::try_from(tag)?, order)
    }

    fn check_members(&self) -> Result<()> {
        check_boundary_rows(self.side, self.order, self.rows)?;
        debug_assert!((0..self.order).all(|k| self.support_of(k).is_subset_of(&self.support)));
        Ok(())
    }

    fn check_index(&self, k: isize) -> Result<usize> {
        if k < 0 || k as usize >= self.order {
            return Err(FilterError::IndexOutOfRange {
                index: k,
                order: self.order,
            });
        }
        Ok(k as usize)
    }

    fn support_of(&self, k: usize) -> SupportInterval {
        let reach = (self.order + k) as isize;
        let (left, right) = match self.side {
            Side::Left => (0, reach),
            Side::Right => (-reach, 0),
        };
        SupportInterval::from_bounds(left, right)
    }

    fn window_of(&self, k: usize) -> SupportInterval {
        let reach = (boundary_row_len(self.order, k) - 1) as isize;
        let (left, right) = match self.side {
            Side::Left => (0, reach),
            Side::Right => (-reach, 0),
        };
        SupportInterval::from_bounds(left, right)
    }

    /// Copy of member `k`'s refinement row in ascending index order
    ///
    /// # Errors
    /// Returns `FilterError::IndexOutOfRange` unless `0 <= k < p`
    pub fn member(&self, k: isize) -> Result<Vec<f64>> {
        let k = self.check_index(k)?;
        Ok(self.rows[k].to_vec())
    }

    /// Support of member `k`: `[0, p+k]` (left) or `[-(p+k), 0]` (right)
    ///
    /// # Errors
    /// Returns `FilterError::IndexOutOfRange` unless `0 <= k < p`
    pub fn member_support(&self, k: isize) -> Result<SupportInterval> {
        let k = self.check_index(k)?;
        Ok(self.support_of(k))
    }

    /// Borrowed view of member `k` with zero-extended indexed access
    ///
    /// # Errors
    /// Returns `FilterError::IndexOutOfRange` unless `0 <= k < p`
    pub fn filter(&self, k: isize) -> Result<BoundaryFilter<'_>> {
        let index = self.check_index(k)?;
        Ok(BoundaryFilter {
            family: self,
            index,
        })
    }

    /// Views of all members, `k = 0..p`
    pub fn members(&self) -> impl Iterator<Item = BoundaryFilter<'_>> {
        (0..self.order).map(move |index| BoundaryFilter {
            family: self,
            index,
        })
    }

    /// Integer offsets within the family support that interact with the
    /// boundary functions, excluding the boundary point `0`
    ///
    /// Both sides step by `-1` from the outer bound of the family support
    /// towards `0`. For the left edge that is `2p-1, ..., 1`. For the right
    /// edge the outer bound is already negative, so the sequence is empty.
    pub fn nonzero_integer_offsets(&self) -> Vec<isize> {
        let start = match self.side {
            Side::Left => self.support.right(),
            Side::Right => self.support.left(),
        };
        if start > 0 {
            (1..=start).rev().collect()
        } else {
            Vec::new()
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn vanishing_moments(&self) -> usize {
        self.order
    }

    /// Union support of all members
    pub fn support(&self) -> SupportInterval {
        self.support
    }

    /// Number of members (`p`)
    pub fn num_members(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for BoundaryFilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} boundary family, order {}, support {}",
            self.side, self.order, self.support
        )?;
        for (k, row) in self.rows.iter().enumerate() {
            writeln!(f, "  k={} on {}: {:?}", k, self.support_of(k), row)?;
        }
        Ok(())
    }
}

/// One member of a [`BoundaryFilterFamily`]
#[derive(Debug, Clone, Copy)]
pub struct BoundaryFilter<'a> {
    family: &'a BoundaryFilterFamily,
    index: usize,
}

impl BoundaryFilter<'_> {
    /// Member index `k` within the family
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn side(&self) -> Side {
        self.family.side
    }

    /// Support of the boundary function itself, `[0, p+k]` or `[-(p+k), 0]`
    pub fn member_support(&self) -> SupportInterval {
        self.family.support_of(self.index)
    }
}

impl ScalingFilter for BoundaryFilter<'_> {
    /// Index window of the refinement row
    fn support(&self) -> SupportInterval {
        self.family.window_of(self.index)
    }

    fn vanishing_moments(&self) -> usize {
        self.family.order
    }

    fn get(&self, index: isize) -> f64 {
        self.support()
            .offset_of(index)
            .map_or(0.0, |offset| self.family.rows[self.index][offset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parsing() {
        assert_eq!("L".parse::<Side>().unwrap(), Side::Left);
        assert_eq!("right".parse::<Side>().unwrap(), Side::Right);
        assert_eq!(" Left ".parse::<Side>().unwrap(), Side::Left);
        assert!(matches!(
            "up".parse::<Side>(),
            Err(FilterError::InvalidSide(s)) if s == "up"
        ));
        assert_eq!(Side::try_from('r').unwrap(), Side::Right);
        assert!(matches!(Side::try_from('X'), Err(FilterError::InvalidSide(_))));
    }

    #[test]
    fn test_side_tag_round_trip() {
        for side in [Side::Left, Side::Right] {
            assert_eq!(Side::try_from(side.tag()).unwrap(), side);
        }
    }

    #[test]
    fn test_family_support() {
        for order in 2..=8 {
            let reach = 2 * order as isize - 1;
            let left = BoundaryFilterFamily::new(Side::Left, order).unwrap();
            assert_eq!(left.support(), SupportInterval::new(0, reach).unwrap());
            let right = BoundaryFilterFamily::new(Side::Right, order).unwrap();
            assert_eq!(right.support(), SupportInterval::new(-reach, 0).unwrap());
        }
    }

    #[test]
    fn test_member_supports_nest() {
        for side in [Side::Left, Side::Right] {
            for order in 2..=8 {
                let family = BoundaryFilterFamily::new(side, order).unwrap();
                assert_eq!(family.num_members(), order as usize);
                let mut previous: Option<SupportInterval> = None;
                for k in 0..order as isize {
                    let support = family.member_support(k).unwrap();
                    assert_eq!(support.len(), order as usize + k as usize + 1);
                    assert!(support.is_subset_of(&family.support()));
                    if let Some(prev) = previous {
                        assert!(prev.is_subset_of(&support));
                    }
                    previous = Some(support);
                }
            }
        }
    }

    #[test]
    fn test_invalid_orders() {
        for side in [Side::Left, Side::Right] {
            for order in [-1, 0, 1, 9, 20] {
                assert!(matches!(
                    BoundaryFilterFamily::new(side, order),
                    Err(FilterError::InvalidOrder { .. })
                ));
            }
        }
    }

    #[test]
    fn test_invalid_tag() {
        assert!(matches!(
            BoundaryFilterFamily::from_tag('X', 3),
            Err(FilterError::InvalidSide(_))
        ));
        assert_eq!(
            BoundaryFilterFamily::from_tag('L', 3).unwrap().side(),
            Side::Left
        );
    }

    #[test]
    fn test_member_index_range() {
        let family = BoundaryFilterFamily::new(Side::Left, 4).unwrap();
        assert!(family.member(0).is_ok());
        assert!(family.member(3).is_ok());
        for k in [-1, 4, 100] {
            assert!(matches!(
                family.member(k),
                Err(FilterError::IndexOutOfRange { index, order: 4 }) if index == k
            ));
            assert!(family.member_support(k).is_err());
            assert!(family.filter(k).is_err());
        }
    }

    #[test]
    fn test_first_member_is_first_row() {
        let family = BoundaryFilterFamily::new(Side::Right, 3).unwrap();
        let rows = raw_boundary_coefficients(Side::Right, 3).unwrap();
        assert_eq!(family.member(0).unwrap(), rows[0]);
        assert_eq!(family.member(2).unwrap(), rows[2]);
    }

    #[test]
    fn test_member_copy_isolation() {
        let family = BoundaryFilterFamily::new(Side::Left, 2).unwrap();
        let original = family.member(1).unwrap();
        let mut copy = family.member(1).unwrap();
        copy.iter_mut().for_each(|c| *c = 0.0);
        assert_eq!(family.member(1).unwrap(), original);
    }

    #[test]
    fn test_member_view_indexing() {
        let family = BoundaryFilterFamily::new(Side::Right, 2).unwrap();
        let view = family.filter(0).unwrap();
        let row = family.member(0).unwrap();
        assert_eq!(view.support(), SupportInterval::new(-2, 0).unwrap());
        assert_eq!(view.member_support(), SupportInterval::new(-2, 0).unwrap());
        assert_eq!(view.get(-2), row[0]);
        assert_eq!(view.get(0), row[2]);
        assert_eq!(view.get(1), 0.0);
        assert_eq!(view.get(-3), 0.0);
        assert_eq!(view.coefficients(), row);
        assert_eq!(view.side(), Side::Right);
        assert_eq!(view.vanishing_moments(), 2);
    }

    #[test]
    fn test_members_iterator() {
        let family = BoundaryFilterFamily::new(Side::Left, 5).unwrap();
        let indices: Vec<usize> = family.members().map(|m| m.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        for member in family.members() {
            let k = member.index();
            assert_eq!(member.len(), 5 + 2 * k + 1);
            assert_eq!(member.member_support().len(), 5 + k + 1);
        }
    }

    #[test]
    fn test_wider_member_window() {
        let left = BoundaryFilterFamily::new(Side::Left, 2).unwrap();
        let view = left.filter(1).unwrap();
        let row = left.member(1).unwrap();
        assert_eq!(row.len(), 5);
        assert_eq!(view.member_support(), SupportInterval::new(0, 3).unwrap());
        assert_eq!(view.support(), SupportInterval::new(0, 4).unwrap());
        assert_eq!(view.get(4), row[4]);
        assert_eq!(view.get(5), 0.0);

        let right = BoundaryFilterFamily::new(Side::Right, 2).unwrap();
        let view = right.filter(1).unwrap();
        assert_eq!(view.support(), SupportInterval::new(-4, 0).unwrap());
        assert_eq!(view.get(-4), right.member(1).unwrap()[0]);
    }

    #[test]
    fn test_left_offsets_descend() {
        let family = BoundaryFilterFamily::new(Side::Left, 3).unwrap();
        assert_eq!(family.nonzero_integer_offsets(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_right_offsets_are_empty() {
        // Stepping down from a negative outer bound towards 0 never yields a
        // value; callers depend on this exact result.
        for order in 2..=8 {
            let family = BoundaryFilterFamily::new(Side::Right, order).unwrap();
            assert!(family.nonzero_integer_offsets().is_empty());
        }
    }

    #[test]
    fn test_display_lists_members() {
        let family = BoundaryFilterFamily::new(Side::Left, 2).unwrap();
        let text = family.to_string();
        assert!(text.starts_with("left boundary family, order 2, support [0, 3]"));
        assert!(text.contains("k=0 on [0, 2]"));
        assert!(text.contains("k=1 on [0, 3]"));
    }
}
