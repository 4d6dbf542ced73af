//! Aggregated pipeline output.
//!
//! ## Purpose
//!
//! This module defines `MatchReport`, the single object handed to external
//! persistence and plotting collaborators: the per-training-series match
//! plan and the final per-observation assignment table, both in submission
//! order.
//!
//! ## Design notes
//!
//! * **Read-only**: the report exposes accessors and performs no
//!   computation; both tables are plain ordered records suitable for
//!   tabular storage (one row per match, one row per observation).
//! * **serde**: with the `serde` feature enabled every row type derives
//!   `Serialize`/`Deserialize`, so a store can persist the report without
//!   any adapter code in the core.
//!
//! ## Non-goals
//!
//! * No rendering, no database access, no file I/O.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::series::{AssignmentRecord, MatchResult};

// ============================================================================
// Training Match
// ============================================================================

/// One training series' match outcome together with its derived tolerance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingMatch<T> {
    /// Caller-supplied identifier of the training series.
    pub source_id: String,
    /// The winning candidate and its statistics.
    pub result: MatchResult<T>,
    /// Acceptance tolerance derived from the result.
    pub tolerance: T,
}

// ============================================================================
// Match Report
// ============================================================================

/// The final output of a matching session.
///
/// Holds the ordered list of training matches and the final assignment
/// table. The only object external collaborators need.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport<T> {
    matches: Vec<TrainingMatch<T>>,
    assignments: Vec<AssignmentRecord<T>>,
}

impl<T> MatchReport<T> {
    /// Assemble a report from its two tables.
    pub(crate) fn new(
        matches: Vec<TrainingMatch<T>>,
        assignments: Vec<AssignmentRecord<T>>,
    ) -> Self {
        Self {
            matches,
            assignments,
        }
    }

    /// Training matches, in the order the training series were submitted.
    #[inline]
    pub fn matches(&self) -> &[TrainingMatch<T>] {
        &self.matches
    }

    /// Final assignment records, index-aligned with the observation set.
    #[inline]
    pub fn assignments(&self) -> &[AssignmentRecord<T>] {
        &self.assignments
    }

    /// Consume the report and return both tables.
    pub fn into_parts(self) -> (Vec<TrainingMatch<T>>, Vec<AssignmentRecord<T>>) {
        (self.matches, self.assignments)
    }
}
