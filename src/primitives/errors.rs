//! Error types for the matching and assignment pipeline.
//!
//! ## Purpose
//!
//! This module defines `MatchError`, the single error taxonomy returned by
//! every fallible operation in the crate. Each variant corresponds to one
//! precondition violation detected before any computation starts.
//!
//! ## Design notes
//!
//! * **Typed, not logged**: failures surface to the caller as values; the
//!   core never writes to a logger.
//! * **Pre-computation only**: every variant describes invalid input, never
//!   a mid-computation failure. The core algorithms are total once their
//!   preconditions hold.
//! * **no_std**: `Display` is hand-rolled on `core::fmt`; `std::error::Error`
//!   is implemented only when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * Display messages are stable and covered by tests.
//!
//! ## Non-goals
//!
//! * No error chaining or backtraces; every failure is local and synchronous.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors that can occur during candidate matching and point assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchError {
    /// The target series contains no values.
    EmptyInput,

    /// The candidate library contains no candidates.
    EmptyLibrary,

    /// A sampled series contains no coordinate pairs.
    EmptyFrame,

    /// A sampled series has x and y vectors of different lengths.
    MismatchedFrame {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },

    /// The target series length differs from the candidate series length.
    LengthMismatch {
        /// Number of values in the target series.
        target_len: usize,
        /// Number of values in every candidate series.
        candidate_len: usize,
    },

    /// The target series contains a non-finite value (NaN or infinity).
    InvalidSeriesValue(String),

    /// The assignment record table is not index-aligned with the observations.
    MismatchedRecords {
        /// Number of observation points.
        observations: usize,
        /// Number of assignment records.
        records: usize,
    },

    /// Two candidates in the library share the same name.
    DuplicateCandidate(String),

    /// A match refers to a candidate name that is not in the library.
    UnknownCandidate(String),

    /// The tolerance is negative or non-finite.
    InvalidTolerance(f64),
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Target series is empty"),
            Self::EmptyLibrary => write!(f, "Candidate library contains no candidates"),
            Self::EmptyFrame => write!(f, "Sampled series contains no coordinate pairs"),
            Self::MismatchedFrame { x_len, y_len } => {
                write!(f, "Frame length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::LengthMismatch {
                target_len,
                candidate_len,
            } => write!(
                f,
                "Length mismatch: target has {} points, candidates have {}",
                target_len, candidate_len
            ),
            Self::InvalidSeriesValue(detail) => {
                write!(f, "Invalid series value: {}", detail)
            }
            Self::MismatchedRecords {
                observations,
                records,
            } => write!(
                f,
                "Record table mismatch: {} observations, {} records",
                observations, records
            ),
            Self::DuplicateCandidate(name) => {
                write!(f, "Duplicate candidate name: '{}'", name)
            }
            Self::UnknownCandidate(name) => {
                write!(f, "Unknown candidate name: '{}'", name)
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", tol)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
