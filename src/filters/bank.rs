use crate::config::FilterConfig;
use crate::error::Result;
use crate::filters::{BoundaryFilterFamily, InteriorFilter, Side};

/// Filters describing a finite-interval wavelet basis of one order
///
/// Holds the interior filter plus the left and right boundary families.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalFilterBank {
    interior: InteriorFilter,
    left: BoundaryFilterFamily,
    right: BoundaryFilterFamily,
}

impl IntervalFilterBank {
    /// Build the bank for `order`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidOrder` unless `2 <= order <= 8`
    pub fn new(order: i32, prefer_symmlet: bool) -> Result<Self> {
        let left = BoundaryFilterFamily::new(Side::Left, order)?;
        let right = BoundaryFilterFamily::new(Side::Right, order)?;
        let interior = InteriorFilter::new(order, prefer_symmlet)?;
        Ok(Self {
            interior,
            left,
            right,
        })
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.order, config.prefer_symmlet)
    }

    pub fn interior(&self) -> &InteriorFilter {
        &self.interior
    }

    pub fn boundary(&self, side: Side) -> &BoundaryFilterFamily {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn vanishing_moments(&self) -> usize {
        self.interior.vanishing_moments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::filters::InteriorVariant;

    #[test]
    fn test_bank_orders_agree() {
        for order in 2..=8 {
            let bank = IntervalFilterBank::new(order, true).unwrap();
            assert_eq!(bank.vanishing_moments(), order as usize);
            assert_eq!(bank.boundary(Side::Left).side(), Side::Left);
            assert_eq!(bank.boundary(Side::Right).side(), Side::Right);
            assert_eq!(bank.boundary(Side::Left).vanishing_moments(), order as usize);
        }
    }

    #[test]
    fn test_bank_rejects_untabulated_boundary_order() {
        assert!(matches!(
            IntervalFilterBank::new(1, true),
            Err(FilterError::InvalidOrder { order: 1, .. })
        ));
        assert!(IntervalFilterBank::new(9, false).is_err());
    }

    #[test]
    fn test_bank_from_config() {
        let config = FilterConfig {
            order: 3,
            prefer_symmlet: false,
            ..FilterConfig::default()
        };
        let bank = IntervalFilterBank::from_config(&config).unwrap();
        assert_eq!(bank.interior().variant(), InteriorVariant::Standard);
        assert_eq!(bank.vanishing_moments(), 3);
    }
}
