//! High-level API for function matching and point assignment.
//!
//! ## Purpose
//!
//! This module is the primary user-facing surface. It re-exports the
//! pipeline types and stage functions, and provides `match_and_classify`,
//! which runs the whole pipeline in one call.
//!
//! ## Key concepts
//!
//! * **Stages**: [`select`] → [`threshold`] → [`assign`], also runnable
//!   individually.
//! * **Session**: [`MatchSession`] for incremental use; `match_and_classify`
//!   for the one-shot flow.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::algorithms::assignment::assign;
pub use crate::algorithms::selection::select;
pub use crate::algorithms::tolerance::threshold;
pub use crate::engine::report::{MatchReport, TrainingMatch};
pub use crate::engine::session::MatchSession;
pub use crate::primitives::errors::MatchError;
pub use crate::primitives::series::{
    AssignmentRecord, CandidateLibrary, MatchResult, ObservationPoint, SampledSeries,
};

// ============================================================================
// One-Shot Pipeline
// ============================================================================

/// Run the full pipeline: match every training series, then classify the
/// observation set against the winners.
///
/// Training series are processed in slice order, which fixes the assignment
/// pass order. Returns the assembled [`MatchReport`].
///
/// ```rust
/// use funcmatch_rs::prelude::*;
///
/// let library = CandidateLibrary::from_table(
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![("f1".to_string(), vec![0.0, 1.0, 2.0, 3.0])],
/// )?;
/// let targets = [("train1", vec![0.0, 1.0, 2.0, 3.0])];
/// let observations = [ObservationPoint::new(1.0, 1.0)];
///
/// let report = match_and_classify(library, &targets, &observations)?;
/// assert_eq!(report.matches().len(), 1);
/// # Result::<(), MatchError>::Ok(())
/// ```
pub fn match_and_classify<T: Float>(
    library: CandidateLibrary<T>,
    targets: &[(&str, Vec<T>)],
    observations: &[ObservationPoint<T>],
) -> Result<MatchReport<T>, MatchError> {
    let mut session = MatchSession::new(library);
    for (source_id, target) in targets {
        session.match_target(source_id, target)?;
    }
    let assignments = session.classify(observations)?;
    Ok(session.into_report(assignments))
}
