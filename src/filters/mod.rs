pub mod bank;
pub mod boundary;
pub mod interior;

pub use bank::IntervalFilterBank;
pub use boundary::{BoundaryFilter, BoundaryFilterFamily, Side};
pub use interior::{InteriorFilter, InteriorVariant};

use crate::support::SupportInterval;

/// Common read access to interior filters and boundary family members
///
/// Filters behave as infinite sequences that vanish outside their support,
/// so `get` never fails.
#[allow(clippy::len_without_is_empty)]
pub trait ScalingFilter {
    /// Closed interval holding every stored coefficient
    fn support(&self) -> SupportInterval;

    /// Vanishing-moment order `p` of the filter family
    fn vanishing_moments(&self) -> usize;

    /// Coefficient at `index`, `0.0` outside the support
    fn get(&self, index: isize) -> f64;

    /// Number of stored coefficients (`right - left + 1`)
    fn len(&self) -> usize {
        self.support().len()
    }

    /// Copy of the stored coefficients in ascending index order
    fn coefficients(&self) -> Vec<f64> {
        self.support().indices().map(|i| self.get(i)).collect()
    }

    /// `(index, coefficient)` pairs over the support
    fn taps(&self) -> impl Iterator<Item = (isize, f64)> + '_
    where
        Self: Sized,
    {
        self.support().indices().map(move |i| (i, self.get(i)))
    }

    /// Ascending support indices whose coefficient is not exactly zero
    fn nonzero_indices(&self) -> Vec<isize> {
        self.support()
            .indices()
            .filter(|&i| self.get(i) != 0.0)
            .collect()
    }
}
