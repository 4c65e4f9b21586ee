//! Read-only coefficient registry
//!
//! The registry is built once, on first access, and never mutated. Interior
//! symmlet rows and boundary families come from compiled-in tables; the
//! standard Daubechies filters have their own tables plus a generator for
//! orders past them.

mod boundary_tables;
mod daubechies;
mod daubechies_table;
mod symmlet;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::constants::{
    BOUNDARY_ORTHONORMALITY_TOLERANCE, MAX_BOUNDARY_ORDER, MAX_SYMMLET_ORDER,
    MIN_BOUNDARY_ORDER, MIN_SYMMLET_ORDER,
};
use crate::error::{FilterError, Result};
use crate::filters::Side;

pub use daubechies::{daubechies_scaling_filter, generate_daubechies};
pub use daubechies_table::daubechies_table;
pub use symmlet::symmlet_table;

/// Boundary rows of one family, `p` rows for order `p`
pub type BoundaryRows = &'static [&'static [f64]];

/// Which table a lookup addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientKind {
    Interior,
    LeftBoundary,
    RightBoundary,
}

impl From<Side> for CoefficientKind {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => CoefficientKind::LeftBoundary,
            Side::Right => CoefficientKind::RightBoundary,
        }
    }
}

/// Raw rows returned by [`CoefficientRegistry::lookup`]
#[derive(Debug, Clone, Copy)]
pub enum RawCoefficients {
    Interior(&'static [f64]),
    Boundary(BoundaryRows),
}

pub struct CoefficientRegistry {
    boundary: BTreeMap<(Side, usize), BoundaryRows>,
}

static REGISTRY: LazyLock<CoefficientRegistry> = LazyLock::new(CoefficientRegistry::build);

/// Process-wide registry
pub fn registry() -> &'static CoefficientRegistry {
    &REGISTRY
}

/// Tabulated symmlet for `order`, or `None` when not tabulated
pub fn raw_interior_coefficients(order: usize) -> Option<&'static [f64]> {
    registry().raw_interior_coefficients(order)
}

/// Boundary rows for `side` and `order`, or `None` when not tabulated
pub fn raw_boundary_coefficients(side: Side, order: usize) -> Option<BoundaryRows> {
    registry().raw_boundary_coefficients(side, order)
}

/// Number of values in refinement row `k` of an order-`order` family
///
/// Member `k` lives on `[0, p+k]`. At the finer scale that span holds the
/// `p` boundary functions and the interior translates `p..=p+2k`, so the row
/// carries `p + 2k + 1` values.
pub fn boundary_row_len(order: usize, k: usize) -> usize {
    order + 2 * k + 1
}

impl CoefficientRegistry {
    fn build() -> Self {
        let mut boundary = BTreeMap::new();

        for order in MIN_BOUNDARY_ORDER as usize..=MAX_BOUNDARY_ORDER as usize {
            for side in [Side::Left, Side::Right] {
                let rows = match side {
                    Side::Left => boundary_tables::left_boundary_table(order),
                    Side::Right => boundary_tables::right_boundary_table(order),
                };
                if let Some(rows) = rows {
                    boundary.insert((side, order), rows);
                }
            }
        }

        log::trace!("Coefficient registry built with {} boundary tables", boundary.len());
        Self { boundary }
    }

    pub fn raw_interior_coefficients(&self, order: usize) -> Option<&'static [f64]> {
        symmlet_table(order)
    }

    pub fn raw_boundary_coefficients(&self, side: Side, order: usize) -> Option<BoundaryRows> {
        self.boundary.get(&(side, order)).copied()
    }

    pub fn lookup(&self, kind: CoefficientKind, order: usize) -> Option<RawCoefficients> {
        match kind {
            CoefficientKind::Interior => {
                self.raw_interior_coefficients(order).map(RawCoefficients::Interior)
            }
            CoefficientKind::LeftBoundary => self
                .raw_boundary_coefficients(Side::Left, order)
                .map(RawCoefficients::Boundary),
            CoefficientKind::RightBoundary => self
                .raw_boundary_coefficients(Side::Right, order)
                .map(RawCoefficients::Boundary),
        }
    }

    /// Check every table against the support formulas
    ///
    /// Symmlet rows must hold `2p` values. Boundary families must hold `p`
    /// orthonormal rows, row `k` holding [`boundary_row_len`] values.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidFilter` naming the first inconsistent row
    pub fn verify(&self) -> Result<()> {
        for order in MIN_SYMMLET_ORDER as usize..=MAX_SYMMLET_ORDER as usize {
            let Some(row) = self.raw_interior_coefficients(order) else {
                continue;
            };
            if row.len() != 2 * order {
                return Err(FilterError::InvalidFilter(format!(
                    "symmlet of order {} has {} coefficients, expected {}",
                    order,
                    row.len(),
                    2 * order
                )));
            }
        }

        for (&(side, order), rows) in &self.boundary {
            check_boundary_rows(side, order, rows)?;
        }
        Ok(())
    }
}

/// Check one boundary family's rows: member count, row lengths against the
/// member supports, and orthonormality of the rows aligned by index
///
/// # Errors
/// Returns `FilterError::InvalidFilter` naming the first inconsistent row
pub fn check_boundary_rows(side: Side, order: usize, rows: &[&[f64]]) -> Result<()> {
    if rows.len() != order {
        return Err(FilterError::InvalidFilter(format!(
            "{} boundary family of order {} has {} members, expected {}",
            side,
            order,
            rows.len(),
            order
        )));
    }

    for (k, row) in rows.iter().enumerate() {
        let expected = boundary_row_len(order, k);
        if row.len() != expected {
            return Err(FilterError::InvalidFilter(format!(
                "{} boundary member {} of order {} has {} coefficients, expected {}",
                side,
                k,
                order,
                row.len(),
                expected
            )));
        }
    }

    for (k, a) in rows.iter().enumerate() {
        for (j, b) in rows.iter().enumerate().skip(k) {
            let dot = aligned_dot(side, a, b);
            let target = if j == k { 1.0 } else { 0.0 };
            if (dot - target).abs() > BOUNDARY_ORTHONORMALITY_TOLERANCE {
                return Err(FilterError::InvalidFilter(format!(
                    "{} boundary members {} and {} of order {} have inner product {:.3e}",
                    side, k, j, order, dot
                )));
            }
        }
    }
    Ok(())
}

/// Inner product of two rows of one family, aligned at the boundary
fn aligned_dot(side: Side, a: &[f64], b: &[f64]) -> f64 {
    match side {
        Side::Left => a.iter().zip(b).map(|(x, y)| x * y).sum(),
        Side::Right => a.iter().rev().zip(b.iter().rev()).map(|(x, y)| x * y).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_registry_is_consistent() {
        registry().verify().unwrap();
    }

    #[test]
    fn test_boundary_orders_present() {
        for order in 2..=8 {
            for side in [Side::Left, Side::Right] {
                let rows = raw_boundary_coefficients(side, order).unwrap();
                assert_eq!(rows.len(), order);
            }
        }
        assert!(raw_boundary_coefficients(Side::Left, 1).is_none());
        assert!(raw_boundary_coefficients(Side::Right, 9).is_none());
    }

    #[test]
    fn test_order_two_row_lengths() {
        let rows = raw_boundary_coefficients(Side::Left, 2).unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 5);
    }

    #[test]
    fn test_left_order_two_reference_values() {
        let rows = raw_boundary_coefficients(Side::Left, 2).unwrap();
        let expected: [&[f64]; 2] = [
            &[0.6033325119, 0.6908955318, -0.3983129977],
            &[0.0375174605, 0.4573276599, 0.8500881025, 0.2238203570, -0.1292227434],
        ];
        for (row, want) in rows.iter().zip(expected) {
            for (got, want) in row.iter().zip(want) {
                assert_abs_diff_eq!(got, want, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_boundary_rows_are_not_interior_filters() {
        for order in 2..=8 {
            let interior = daubechies_table(order).unwrap();
            for side in [Side::Left, Side::Right] {
                for row in raw_boundary_coefficients(side, order).unwrap() {
                    assert_ne!(*row, interior);
                }
            }
        }
    }

    #[test]
    fn test_check_rejects_wrong_row_length() {
        let rows: [&[f64]; 2] = [&[0.6, 0.7, -0.4], &[0.04, 0.46, 0.85, 0.22]];
        assert!(matches!(
            check_boundary_rows(Side::Left, 2, &rows),
            Err(FilterError::InvalidFilter(msg)) if msg.contains("member 1")
        ));
    }

    #[test]
    fn test_check_rejects_missing_member() {
        let rows = raw_boundary_coefficients(Side::Right, 3).unwrap();
        assert!(matches!(
            check_boundary_rows(Side::Right, 3, &rows[..2]),
            Err(FilterError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_check_rejects_non_orthonormal_rows() {
        let rows = raw_boundary_coefficients(Side::Left, 3).unwrap();
        let mut scaled: Vec<f64> = rows[1].to_vec();
        scaled[0] += 1e-6;
        let tampered: [&[f64]; 3] = [rows[0], &scaled, rows[2]];
        assert!(check_boundary_rows(Side::Left, 3, &tampered).is_err());
    }

    #[test]
    fn test_right_rows_align_at_the_end() {
        let rows = raw_boundary_coefficients(Side::Right, 4).unwrap();
        let dot = aligned_dot(Side::Right, rows[0], rows[3]);
        assert_abs_diff_eq!(dot, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(aligned_dot(Side::Right, rows[3], rows[3]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lookup_kinds() {
        let reg = registry();
        assert!(matches!(
            reg.lookup(CoefficientKind::Interior, 4),
            Some(RawCoefficients::Interior(row)) if row.len() == 8
        ));
        assert!(matches!(
            reg.lookup(CoefficientKind::from(Side::Right), 3),
            Some(RawCoefficients::Boundary(rows)) if rows.len() == 3
        ));
        assert!(reg.lookup(CoefficientKind::Interior, 1).is_none());
        assert!(reg.lookup(CoefficientKind::LeftBoundary, 9).is_none());
    }

    #[test]
    fn test_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| registry() as *const CoefficientRegistry as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
