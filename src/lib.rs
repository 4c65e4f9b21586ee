//! Daubechies scaling filters for wavelet bases on an interval.
//!
//! Interior filters are single coefficient sequences on a fixed support
//! window. Boundary filters come in families, one member per boundary
//! scaling function, each with a support that grows with the member index.
//! Both are read through the [`filters::ScalingFilter`] trait, which
//! zero-extends every filter outside its support.
//!
//! ```
//! use daubechies_filters::{BoundaryFilterFamily, InteriorFilter, Side};
//!
//! let interior = InteriorFilter::new(4, true).unwrap();
//! assert_eq!(interior.support().left(), -3);
//! assert_eq!(interior.get(100), 0.0);
//!
//! let left = BoundaryFilterFamily::new(Side::Left, 2).unwrap();
//! assert_eq!(left.member_support(1).unwrap().len(), 4);
//! assert_eq!(left.member(1).unwrap().len(), 5);
//! ```

pub mod coefficients;
pub mod config;
pub mod constants;
pub mod error;
pub mod filters;
pub mod output;
pub mod support;

pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use filters::{
    BoundaryFilter, BoundaryFilterFamily, InteriorFilter, InteriorVariant, IntervalFilterBank,
    ScalingFilter, Side,
};
pub use support::SupportInterval;
