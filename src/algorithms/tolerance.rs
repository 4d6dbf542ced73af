//! Acceptance tolerance derivation.
//!
//! ## Purpose
//!
//! This module derives the acceptance radius used by the assignment pass
//! from a match result's worst training deviation.
//!
//! ## Design notes
//!
//! * The worst one-dimensional deviation seen during matching is scaled by
//!   √2, the unit-square diagonal, so acceptance in two-dimensional
//!   Euclidean distance is at least as permissive as the worst
//!   one-dimensional deviation.
//!
//! ## Invariants
//!
//! * The threshold is non-negative and non-decreasing in
//!   `|max_deviation|`; a zero deviation yields a zero threshold.
//!
//! ## Non-goals
//!
//! * No configurable scale factor; √2 is the contract.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::series::MatchResult;

// ============================================================================
// Threshold
// ============================================================================

/// Derive the acceptance tolerance for a match result.
///
/// `threshold = |max_deviation| * sqrt(2)`. Total function; never fails.
#[inline]
pub fn threshold<T: Float>(result: &MatchResult<T>) -> T {
    let sqrt2 = (T::one() + T::one()).sqrt();
    result.max_deviation.abs() * sqrt2
}
