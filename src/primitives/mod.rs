//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks of the matching
//! pipeline:
//! - The sampled-series data model and the candidate library
//! - The observation/assignment record types
//! - The `MatchError` taxonomy
//!
//! These carry no algorithmic logic; selection, tolerance derivation, and
//! assignment live in the layers above.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for matching and assignment.
pub mod errors;

/// Sampled-series data model and candidate library.
pub mod series;
