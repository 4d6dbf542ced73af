//! Sampled-series data model and candidate library.
//!
//! ## Purpose
//!
//! This module defines the in-memory data model the matching pipeline
//! operates on: a positional `(x, y)` series (`SampledSeries`), an
//! insertion-ordered named collection of such series (`CandidateLibrary`),
//! free-standing observation points, and the per-observation assignment
//! record mutated by the assignment pass.
//!
//! ## Design notes
//!
//! * **Positional, not keyed**: a series is a fixed-order pair of vectors,
//!   never a map keyed by x. Series comparison is by index, and the library
//!   iterates candidates in insertion order so that tie-breaking is
//!   deterministic across runs.
//! * **Immutable library**: `CandidateLibrary` is built once from tabular
//!   data and never mutated during a matching session.
//! * **Validated construction**: constructors return `Result` so invalid
//!   coordinate data is rejected before any computation sees it.
//!
//! ## Key concepts
//!
//! * **SampledSeries**: one candidate function sampled on a grid.
//! * **CandidateLibrary**: name → series, all sharing one grid length.
//! * **AssignmentRecord**: mutable per-observation state, `None` = unassigned.
//!
//! ## Invariants
//!
//! * `SampledSeries` x and y vectors always have equal length.
//! * Every series in a library has the same length as the library grid.
//! * Candidate names within a library are unique.
//!
//! ## Non-goals
//!
//! * No sorting, deduplication, or interpolation of series data.
//! * No file or database I/O; tabular data arrives already in memory.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MatchError;

// ============================================================================
// Sampled Series
// ============================================================================

/// An ordered sequence of `(x, y)` sample pairs.
///
/// The order is the order the source provided; x values are not required to
/// be sorted or unique. All comparison against a `SampledSeries` is by
/// position or by brute-force scan, never by x lookup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampledSeries<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Float> SampledSeries<T> {
    /// Create a series from parallel x and y vectors.
    ///
    /// Fails with [`MatchError::MismatchedFrame`] when the vectors differ in
    /// length.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self, MatchError> {
        if x.len() != y.len() {
            return Err(MatchError::MismatchedFrame {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Number of sample pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Whether the series contains no sample pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The x values, in source order.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.x
    }

    /// The y values, in source order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.y
    }

    /// Iterate over the `(x, y)` sample pairs in source order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&xi, &yi)| (xi, yi))
    }
}

// ============================================================================
// Candidate Library
// ============================================================================

/// A named, insertion-ordered collection of [`SampledSeries`] sharing one
/// x-grid.
///
/// Built once from tabular data, read-only afterwards. Iteration order is
/// insertion order; the selection tie-break depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateLibrary<T> {
    names: Vec<String>,
    series: Vec<SampledSeries<T>>,
    grid_len: usize,
}

impl<T: Float> CandidateLibrary<T> {
    /// Build a library from a grid column and named value columns.
    ///
    /// This is the in-memory end of the tabular loading contract: the loader
    /// hands over one grid column plus at least one value column. Fails with
    /// [`MatchError::EmptyInput`] when the grid is empty,
    /// [`MatchError::EmptyLibrary`] when no value columns are given,
    /// [`MatchError::MismatchedFrame`] when a column length differs from the
    /// grid length, and [`MatchError::DuplicateCandidate`] on a repeated
    /// column name.
    pub fn from_table<I>(grid: Vec<T>, columns: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = (String, Vec<T>)>,
    {
        if grid.is_empty() {
            return Err(MatchError::EmptyInput);
        }

        let grid_len = grid.len();
        let mut names: Vec<String> = Vec::new();
        let mut series: Vec<SampledSeries<T>> = Vec::new();

        for (name, values) in columns {
            if values.len() != grid_len {
                return Err(MatchError::MismatchedFrame {
                    x_len: grid_len,
                    y_len: values.len(),
                });
            }
            if names.iter().any(|n| *n == name) {
                return Err(MatchError::DuplicateCandidate(name));
            }
            series.push(SampledSeries::new(grid.clone(), values)?);
            names.push(name);
        }

        if series.is_empty() {
            return Err(MatchError::EmptyLibrary);
        }

        Ok(Self {
            names,
            series,
            grid_len,
        })
    }

    /// Number of candidates in the library.
    #[inline]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the library contains no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Length of the shared x-grid (and of every candidate series).
    #[inline]
    pub fn series_len(&self) -> usize {
        self.grid_len
    }

    /// Candidate names in insertion order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a candidate series by name.
    pub fn get(&self, name: &str) -> Option<&SampledSeries<T>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.series[i])
    }

    /// Iterate over `(name, series)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SampledSeries<T>)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.series.iter())
    }
}

// ============================================================================
// Observation Points
// ============================================================================

/// A free-standing `(x, y)` observation, not constrained to any grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationPoint<T> {
    /// The x coordinate.
    pub x: T,
    /// The y coordinate.
    pub y: T,
}

impl<T: Float> ObservationPoint<T> {
    /// Create an observation point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Assignment Records
// ============================================================================

/// Mutable per-observation assignment state.
///
/// Created unassigned (`candidate: None`, `deviation: 0`) and updated in
/// place by successive assignment passes; records are never removed, only
/// rewritten when a closer candidate is found.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentRecord<T> {
    /// The assigned candidate name, or `None` while unassigned.
    pub candidate: Option<String>,
    /// Distance to the nearest sampled point of the assigned candidate.
    /// Zero while unassigned; always non-negative.
    pub deviation: T,
}

impl<T: Float> AssignmentRecord<T> {
    /// Create an unassigned record.
    #[inline]
    pub fn unassigned() -> Self {
        Self {
            candidate: None,
            deviation: T::zero(),
        }
    }

    /// Whether the record has been assigned to a candidate.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.candidate.is_some()
    }

    /// Create a table of unassigned records, one per observation.
    pub fn table(len: usize) -> Vec<Self> {
        (0..len).map(|_| Self::unassigned()).collect()
    }
}

impl<T: Float> Default for AssignmentRecord<T> {
    fn default() -> Self {
        Self::unassigned()
    }
}

// ============================================================================
// Match Result
// ============================================================================

/// The outcome of matching one target series against the candidate library.
///
/// Only the winning candidate's statistics are retained.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult<T> {
    /// Name of the best-fitting candidate.
    pub candidate: String,
    /// Sum of squared positional differences for the winning candidate.
    pub sum_squared_error: T,
    /// Largest positive `candidate[i] - target[i]` difference seen during
    /// the winning match. Zero when no candidate value exceeds the target;
    /// negative excursions are never reported.
    pub max_deviation: T,
}
