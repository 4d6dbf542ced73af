//! Input validation for matching and assignment.
//!
//! ## Purpose
//!
//! This module provides validation functions for the matching pipeline's
//! inputs: target series, candidate frames, tolerances, and record tables.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Pre-computation checks**: every algorithm validates its inputs before
//!   touching any value; an error means nothing was computed or mutated.
//! * **Finite checks**: target series must contain only finite values (no
//!   NaN/Inf).
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MatchError;
use crate::primitives::series::{AssignmentRecord, CandidateLibrary, SampledSeries};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for matching inputs.
///
/// Provides static methods for validating pipeline inputs. All methods
/// return `Result<(), MatchError>` and fail fast upon identifying the first
/// violation.
pub struct Validator;

impl Validator {
    /// Validate a target series against the library's series length.
    ///
    /// Checks, in order: non-empty, length equal to the candidate series
    /// length, and all values finite.
    pub fn validate_target<T: Float>(
        target: &[T],
        candidate_len: usize,
    ) -> Result<(), MatchError> {
        // Check 1: Non-empty
        if target.is_empty() {
            return Err(MatchError::EmptyInput);
        }

        // Check 2: Positional comparison requires equal lengths
        if target.len() != candidate_len {
            return Err(MatchError::LengthMismatch {
                target_len: target.len(),
                candidate_len,
            });
        }

        // Check 3: All values finite
        for (i, &val) in target.iter().enumerate() {
            if !val.is_finite() {
                return Err(MatchError::InvalidSeriesValue(format!(
                    "target[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that the library holds at least one candidate.
    pub fn validate_library<T: Float>(library: &CandidateLibrary<T>) -> Result<(), MatchError> {
        if library.is_empty() {
            return Err(MatchError::EmptyLibrary);
        }
        Ok(())
    }

    /// Validate a candidate frame for the assignment pass.
    pub fn validate_frame<T: Float>(series: &SampledSeries<T>) -> Result<(), MatchError> {
        if series.is_empty() {
            return Err(MatchError::EmptyFrame);
        }
        Ok(())
    }

    /// Validate an acceptance tolerance.
    ///
    /// Zero is valid: it accepts only observations coinciding exactly with a
    /// sampled point.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), MatchError> {
        if !tolerance.is_finite() || tolerance < T::zero() {
            return Err(MatchError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that the record table is index-aligned with the observations.
    pub fn validate_records<T: Float>(
        observations: usize,
        records: &[AssignmentRecord<T>],
    ) -> Result<(), MatchError> {
        if records.len() != observations {
            return Err(MatchError::MismatchedRecords {
                observations,
                records: records.len(),
            });
        }
        Ok(())
    }
}
