//! Least-squares candidate selection.
//!
//! ## Purpose
//!
//! This module picks, for one target series, the candidate in the library
//! with the smallest sum of squared positional differences, and records the
//! worst positive deviation observed during that match.
//!
//! ## Design notes
//!
//! * **Positional comparison**: index `i` of a candidate is compared against
//!   index `i` of the target, regardless of the x values at those indices.
//!   The library is never joined on x.
//! * **Stable tie-break**: candidates are visited in library insertion
//!   order; a later candidate replaces the running best only on a strictly
//!   smaller error sum, so equal sums resolve to the earlier candidate.
//! * **Signed deviation floor**: the per-match maximum deviation tracks the
//!   largest positive `candidate − target` difference starting from zero.
//!   A candidate that runs entirely below the target reports zero, not the
//!   most negative difference.
//!
//! ## Invariants
//!
//! * `sum_squared_error >= 0` and `max_deviation >= 0` in every result.
//! * Pure function of its inputs; losing candidates' statistics are
//!   discarded.
//!
//! ## Non-goals
//!
//! * No model fitting beyond the raw sum of squares.
//! * No normalization or weighting of differences.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::MatchError;
use crate::primitives::series::{CandidateLibrary, MatchResult};

// ============================================================================
// Selection
// ============================================================================

/// Select the best-fitting candidate for `target`.
///
/// Fails with [`MatchError::EmptyLibrary`] when the library has no
/// candidates, [`MatchError::EmptyInput`] or [`MatchError::LengthMismatch`]
/// when the target does not line up with the library grid, and
/// [`MatchError::InvalidSeriesValue`] when the target contains a non-finite
/// value. No computation happens before validation passes.
pub fn select<T: Float>(
    target: &[T],
    library: &CandidateLibrary<T>,
) -> Result<MatchResult<T>, MatchError> {
    Validator::validate_library(library)?;
    Validator::validate_target(target, library.series_len())?;

    let mut best: Option<MatchResult<T>> = None;

    for (name, series) in library.iter() {
        let mut sum_squared_error = T::zero();
        let mut max_deviation = T::zero();

        for (&candidate_y, &target_y) in series.ys().iter().zip(target.iter()) {
            let diff = candidate_y - target_y;
            if diff > max_deviation {
                max_deviation = diff;
            }
            sum_squared_error = sum_squared_error + diff * diff;
        }

        let replace = match &best {
            // First candidate initializes the running best unconditionally.
            None => true,
            // Strictly smaller only: equal sums keep the earlier candidate.
            Some(current) => sum_squared_error < current.sum_squared_error,
        };

        if replace {
            best = Some(MatchResult {
                candidate: name.to_string(),
                sum_squared_error,
                max_deviation,
            });
        }
    }

    // validate_library guarantees at least one candidate was visited
    best.ok_or(MatchError::EmptyLibrary)
}
