//! Tolerance-gated point assignment.
//!
//! ## Purpose
//!
//! This module classifies observation points against one candidate series:
//! every observation whose nearest sampled point lies within the candidate's
//! tolerance is assigned to the candidate (or re-assigned, when the new
//! distance beats the stored one). The record table is shared across passes,
//! one pass per winning candidate.
//!
//! ## Design notes
//!
//! * **Order matters across passes**: later passes can overwrite earlier
//!   assignments, so callers must invoke `assign` in the order the match
//!   results were produced. Within a single pass, only the minimum distance
//!   per observation is used, so scan order is irrelevant.
//! * **Replacement comparison**: a record is replaced when its stored
//!   deviation (always non-negative) is strictly greater than the new raw
//!   minimum distance. The stored value is the absolute distance while the
//!   comparison uses the raw one. Equal distances keep the earlier
//!   assignment.
//! * **In-place mutation**: the pass mutates the record table and returns
//!   nothing else; records are never removed.
//!
//! ## Invariants
//!
//! * `records[i].deviation >= 0` before and after every pass.
//! * A pass never touches records whose minimum distance exceeds the
//!   tolerance.
//! * Repeating a pass with identical inputs leaves the table unchanged.
//!
//! ## Non-goals
//!
//! * No spatial indexing; the nearest-point search is a full scan.
//! * No removal or compaction of records.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::distance;
use crate::primitives::errors::MatchError;
use crate::primitives::series::{AssignmentRecord, ObservationPoint, SampledSeries};

// ============================================================================
// Assignment Pass
// ============================================================================

/// Run one assignment pass for `candidate` over all observations.
///
/// `records` must be index-aligned with `observations`. Fails with
/// [`MatchError::EmptyFrame`] when the candidate has no sample pairs,
/// [`MatchError::InvalidTolerance`] on a negative or non-finite tolerance,
/// and [`MatchError::MismatchedRecords`] when the table is not aligned.
/// Validation happens before any distance is computed or any record touched.
pub fn assign<T: Float>(
    observations: &[ObservationPoint<T>],
    records: &mut [AssignmentRecord<T>],
    candidate: &SampledSeries<T>,
    candidate_name: &str,
    tolerance: T,
) -> Result<(), MatchError> {
    Validator::validate_frame(candidate)?;
    Validator::validate_tolerance(tolerance)?;
    Validator::validate_records(observations.len(), records)?;

    for (point, record) in observations.iter().zip(records.iter_mut()) {
        let d_min = distance::nearest_distance(candidate, point.x, point.y);
        if d_min > tolerance {
            continue;
        }

        let replace = match record.candidate {
            None => true,
            // Stored absolute deviation against the new raw distance.
            Some(_) => record.deviation > d_min,
        };

        if replace {
            record.candidate = Some(candidate_name.into());
            record.deviation = d_min.abs();
        }
    }

    Ok(())
}
