//! Pipeline orchestration.
//!
//! ## Purpose
//!
//! This module drives the full matching pipeline: a `MatchSession` owns the
//! candidate library, matches training series against it one at a time, and
//! classifies an observation set against all winning candidates in match
//! order.
//!
//! ## Design notes
//!
//! * **Submission order is the contract**: training matches are stored in
//!   the order they were produced, and classification runs one assignment
//!   pass per match in exactly that order. Later passes can overwrite
//!   earlier assignments, so reordering would change the result.
//! * **Single writer**: the assignment record table is created by
//!   `classify` and mutated by one pass at a time; no other state is shared
//!   between passes.
//! * **Synchronous and CPU-bound**: all data is resident in memory before
//!   the session runs; nothing blocks, suspends, or retries.
//!
//! ## Key concepts
//!
//! * **MatchSession**: library + ordered match list.
//! * **classify**: one `assign` pass per stored match, in order.
//!
//! ## Invariants
//!
//! * `matches()` preserves submission order.
//! * The library is immutable for the lifetime of the session.
//!
//! ## Non-goals
//!
//! * No parallel execution; a correct parallelization would still have to
//!   commit record mutations in match order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::{assignment, selection, tolerance};
use crate::engine::report::{MatchReport, TrainingMatch};
use crate::primitives::errors::MatchError;
use crate::primitives::series::{AssignmentRecord, CandidateLibrary, ObservationPoint};

// ============================================================================
// Match Session
// ============================================================================

/// A matching session over one candidate library.
///
/// Built once per library; accumulates training matches and classifies
/// observation sets against them.
#[derive(Debug, Clone)]
pub struct MatchSession<T> {
    library: CandidateLibrary<T>,
    matches: Vec<TrainingMatch<T>>,
}

impl<T: Float> MatchSession<T> {
    /// Start a session over `library`.
    pub fn new(library: CandidateLibrary<T>) -> Self {
        Self {
            library,
            matches: Vec::new(),
        }
    }

    /// The candidate library this session matches against.
    #[inline]
    pub fn library(&self) -> &CandidateLibrary<T> {
        &self.library
    }

    /// Training matches recorded so far, in submission order.
    #[inline]
    pub fn matches(&self) -> &[TrainingMatch<T>] {
        &self.matches
    }

    /// Match one training series against the library and record the result.
    ///
    /// Runs selection, derives the tolerance, and appends the match to the
    /// session in submission order. Returns the recorded entry.
    pub fn match_target(
        &mut self,
        source_id: &str,
        target: &[T],
    ) -> Result<&TrainingMatch<T>, MatchError> {
        let result = selection::select(target, &self.library)?;
        let tolerance = tolerance::threshold(&result);
        self.matches.push(TrainingMatch {
            source_id: source_id.to_string(),
            result,
            tolerance,
        });
        // just pushed, cannot be empty
        Ok(self.matches.last().unwrap())
    }

    /// Classify an observation set against all recorded matches.
    ///
    /// Creates one unassigned record per observation, then runs one
    /// assignment pass per recorded match in submission order. Returns the
    /// final record table, index-aligned with `observations`.
    pub fn classify(
        &self,
        observations: &[ObservationPoint<T>],
    ) -> Result<Vec<AssignmentRecord<T>>, MatchError> {
        let mut records = AssignmentRecord::table(observations.len());

        for entry in &self.matches {
            let series = self
                .library
                .get(&entry.result.candidate)
                .ok_or_else(|| MatchError::UnknownCandidate(entry.result.candidate.clone()))?;
            assignment::assign(
                observations,
                &mut records,
                series,
                &entry.result.candidate,
                entry.tolerance,
            )?;
        }

        Ok(records)
    }

    /// Consume the session and assemble the final report.
    pub fn into_report(self, assignments: Vec<AssignmentRecord<T>>) -> MatchReport<T> {
        MatchReport::new(self.matches, assignments)
    }
}
