//! Order bounds and numeric tolerances
//!
//! These constants define which vanishing-moment orders are tabulated and
//! how the Daubechies generator decides that its root iteration converged.

/// Smallest order accepted for any interior filter.
pub const MIN_INTERIOR_ORDER: i32 = 1;

/// Smallest order with a tabulated symmlet. Order 1 is the Haar filter and is
/// always served by the standard Daubechies filter.
pub const MIN_SYMMLET_ORDER: i32 = 2;

/// Largest order with a tabulated symmlet.
pub const MAX_SYMMLET_ORDER: i32 = 8;

/// Boundary families are only tabulated for orders in this range.
pub const MIN_BOUNDARY_ORDER: i32 = 2;
pub const MAX_BOUNDARY_ORDER: i32 = 8;

/// Largest order served from the compiled-in Daubechies tables.
pub const MAX_TABULATED_DAUBECHIES_ORDER: usize = 38;

/// Largest order the Daubechies generator accepts. Up to here the generated
/// filters stay orthonormal to about 1e-9; beyond it the spectral
/// factorization loses too much accuracy in double precision.
pub const MAX_GENERATOR_ORDER: usize = 45;

/// Relative step size below which a Durand-Kerner sweep counts as converged.
pub const ROOT_TOLERANCE: f64 = 1e-14;

/// Step size still accepted once the iteration cap is reached.
/// Above order ~25 the Daubechies polynomial stalls just short of
/// `ROOT_TOLERANCE` in double precision.
pub const ROOT_ACCEPT_TOLERANCE: f64 = 1e-9;

/// Iteration cap for the Durand-Kerner root finder.
pub const MAX_ROOT_ITERATIONS: usize = 500;

/// Boundary family rows must be orthonormal to within this tolerance.
pub const BOUNDARY_ORTHONORMALITY_TOLERANCE: f64 = 1e-12;
