use std::fmt;

use crate::coefficients::{daubechies_scaling_filter, raw_interior_coefficients};
use crate::constants::{MAX_SYMMLET_ORDER, MIN_INTERIOR_ORDER, MIN_SYMMLET_ORDER};
use crate::error::{FilterError, Result};
use crate::filters::ScalingFilter;
use crate::support::SupportInterval;

/// Coefficient set an interior filter was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteriorVariant {
    /// Tabulated least-asymmetric filter on `[-p+1, p]`
    Symmlet,
    /// Generated Daubechies filter on `[0, 2p-1]`
    Standard,
}

impl fmt::Display for InteriorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteriorVariant::Symmlet => write!(f, "symmlet"),
            InteriorVariant::Standard => write!(f, "standard"),
        }
    }
}

/// Translation-invariant Daubechies scaling filter
///
/// Holds `2p` coefficients on an integer support window. Reads outside the
/// window return zero.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorFilter {
    order: usize,
    variant: InteriorVariant,
    support: SupportInterval,
    coefficients: Vec<f64>,
}

impl InteriorFilter {
    /// Create an interior filter with `order` vanishing moments
    ///
    /// With `prefer_symmlet` set and `1 < order <= 8` the tabulated symmlet
    /// is placed on `[-order+1, order]`. Every other order, or any order with
    /// `prefer_symmlet` unset, uses the generated Daubechies filter on
    /// `[0, 2*order-1]`.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidOrder` if `order < 1` or the standard
    /// filter is needed above `MAX_GENERATOR_ORDER`, and
    /// `FilterError::FilterDesign` if the Daubechies generator fails
    pub fn new(order: i32, prefer_symmlet: bool) -> Result<Self> {
        if order < MIN_INTERIOR_ORDER {
            return Err(FilterError::InvalidOrder {
                order,
                reason: format!("interior filters need order >= {}", MIN_INTERIOR_ORDER),
            });
        }
        let p = order as usize;

        let use_symmlet =
            prefer_symmlet && (MIN_SYMMLET_ORDER..=MAX_SYMMLET_ORDER).contains(&order);

        let filter = if use_symmlet {
            let row = raw_interior_coefficients(p).ok_or_else(|| FilterError::InvalidOrder {
                order,
                reason: "no symmlet tabulated".to_string(),
            })?;
            Self::place(order, InteriorVariant::Symmlet, 1 - order as isize, row.to_vec())?
        } else {
            Self::place(order, InteriorVariant::Standard, 0, daubechies_scaling_filter(p)?)?
        };

        log::debug!(
            "Built {} interior filter of order {} on {}",
            filter.variant,
            filter.order,
            filter.support
        );
        Ok(filter)
    }

    /// Tabulated symmlet when available, generated Daubechies otherwise
    pub fn symmlet(order: i32) -> Result<Self> {
        Self::new(order, true)
    }

    /// Generated Daubechies filter on `[0, 2*order-1]`
    pub fn standard(order: i32) -> Result<Self> {
        Self::new(order, false)
    }

    fn place(
        order: i32,
        variant: InteriorVariant,
        left: isize,
        coefficients: Vec<f64>,
    ) -> Result<Self> {
        // Unreachable after the order guard in `new`; kept as an invariant check.
        debug_assert!(order >= 0, "negative order reached placement");
        if order < 0 {
            return Err(FilterError::InvalidFilter(format!(
                "negative order {} reached placement",
                order
            )));
        }

        let p = order as usize;
        if coefficients.len() != 2 * p {
            return Err(FilterError::InvalidFilter(format!(
                "{} filter of order {} has {} coefficients, expected {}",
                variant,
                order,
                coefficients.len(),
                2 * p
            )));
        }

        let support = SupportInterval::with_len(left, coefficients.len())?;
        Ok(Self {
            order: p,
            variant,
            support,
            coefficients,
        })
    }

    /// Coefficient at `index`, `0.0` outside the support
    pub fn get(&self, index: isize) -> f64 {
        self.support
            .offset_of(index)
            .map_or(0.0, |offset| self.coefficients[offset])
    }

    /// Copy of the coefficients in ascending index order
    pub fn coefficients(&self) -> Vec<f64> {
        self.coefficients.clone()
    }

    pub fn support(&self) -> SupportInterval {
        self.support
    }

    pub fn vanishing_moments(&self) -> usize {
        self.order
    }

    pub fn variant(&self) -> InteriorVariant {
        self.variant
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.support.len()
    }
}

impl ScalingFilter for InteriorFilter {
    fn support(&self) -> SupportInterval {
        InteriorFilter::support(self)
    }

    fn vanishing_moments(&self) -> usize {
        InteriorFilter::vanishing_moments(self)
    }

    fn get(&self, index: isize) -> f64 {
        InteriorFilter::get(self, index)
    }

    fn coefficients(&self) -> Vec<f64> {
        InteriorFilter::coefficients(self)
    }
}

impl fmt::Display for InteriorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} interior filter, order {}, support {}: {:?}",
            self.variant, self.order, self.support, self.coefficients
        )
    }
}
