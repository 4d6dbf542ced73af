//! Euclidean distance and nearest-sampled-point search.
//!
//! ## Purpose
//!
//! This module provides the distance computations behind the assignment
//! pass: 2D Euclidean point distance and a brute-force scan for the nearest
//! sampled point of a candidate series.
//!
//! ## Design notes
//!
//! * **Brute force by contract**: the nearest-point search visits every
//!   sample of the series. No ordering or tie-break depends on search order
//!   within one series, so a spatial index would be a valid drop-in
//!   replacement, but the linear scan is the specified baseline.
//! * **Full plane, not grid**: observations are compared against every
//!   sampled point, not only points sharing their x value.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero if and only if the points are identical.
//!
//! ## Non-goals
//!
//! * No interpolation between sample points; only sampled points are
//!   candidates for the minimum.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::series::SampledSeries;

// ============================================================================
// Distance Computation Functions
// ============================================================================

/// Compute the Euclidean distance between two 2D points.
#[inline]
pub fn euclidean<T: Float>(ax: T, ay: T, bx: T, by: T) -> T {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from `(px, py)` to the nearest sampled point of `series`.
///
/// Full linear scan over every sample pair. Returns positive infinity for an
/// empty series; callers validate non-emptiness first.
pub fn nearest_distance<T: Float>(series: &SampledSeries<T>, px: T, py: T) -> T {
    series
        .points()
        .map(|(sx, sy)| euclidean(px, py, sx, sy))
        .fold(T::infinity(), T::min)
}
