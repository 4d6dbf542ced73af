//! # funcmatch: least-squares function matching and point assignment
//!
//! Given a small library of reference ("candidate") functions sampled on a
//! shared grid, this crate
//!
//! 1. selects, for each observed training series, the candidate with the
//!    smallest sum of squared errors, recording the worst positive deviation
//!    seen during the match,
//! 2. derives an acceptance tolerance from that deviation (worst deviation
//!    scaled by √2), and
//! 3. classifies arbitrary `(x, y)` observation points against the winning
//!    candidates: each observation is assigned to the candidate whose nearest
//!    sampled point lies within the candidate's tolerance, or left
//!    unassigned.
//!
//! Comparison between series is strictly positional: index `i` of a candidate
//! is compared against index `i` of the target regardless of the x-values at
//! those indices. Assignment, by contrast, is a brute-force scan over every
//! sampled point of the candidate, so an observation may be captured by a
//! sample with a different x. Both behaviors are deliberate contracts of this
//! crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use funcmatch_rs::prelude::*;
//!
//! let grid = vec![0.0, 1.0, 2.0, 3.0];
//! let library = CandidateLibrary::from_table(
//!     grid,
//!     vec![
//!         ("f1".to_string(), vec![0.0, 1.0, 2.0, 3.0]),
//!         ("f2".to_string(), vec![0.0, 2.0, 4.0, 6.0]),
//!     ],
//! )?;
//!
//! let mut session = MatchSession::new(library);
//! session.match_target("train1", &[0.1, 1.1, 1.9, 3.0])?;
//!
//! let observations = vec![ObservationPoint::new(1.0, 1.2)];
//! let assignments = session.classify(&observations)?;
//! let report = session.into_report(assignments);
//!
//! for entry in report.matches() {
//!     println!("{} -> {}", entry.source_id, entry.result.candidate);
//! }
//! # Result::<(), MatchError>::Ok(())
//! ```
//!
//! The individual pipeline stages are also available as free functions:
//! [`select`](prelude::select), [`threshold`](prelude::threshold), and
//! [`assign`](prelude::assign).
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, MatchError>`. All failures are
//! synchronous pre-computation validation errors; nothing is retried and
//! nothing is logged. The caller decides whether to skip, log, or abort.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! funcmatch_rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error taxonomy.
//
// Contains the sampled-series data model (`SampledSeries`,
// `CandidateLibrary`, `ObservationPoint`, `AssignmentRecord`) and the
// `MatchError` taxonomy.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains 2D Euclidean distance and the brute-force nearest-sampled-point
// scan used by the assignment pass.
mod math;

// Layer 3: Algorithms - core matching operations.
//
// Contains least-squares candidate selection, tolerance derivation, and the
// tolerance-gated assignment pass.
mod algorithms;

// Layer 4: Engine - validation and orchestration.
//
// Contains fail-fast input validation, the `MatchSession` pipeline driver,
// and the `MatchReport` handed to persistence/plotting collaborators.
mod engine;

// High-level public API.
//
// Re-exports the pipeline types and provides the one-shot
// `match_and_classify` convenience.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard funcmatch prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use funcmatch_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        assign, match_and_classify, select, threshold, AssignmentRecord, CandidateLibrary,
        MatchError, MatchReport, MatchResult, MatchSession, ObservationPoint, SampledSeries,
        TrainingMatch,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and orchestration.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
