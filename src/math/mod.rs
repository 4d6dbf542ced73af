//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the matching
//! pipeline:
//! - 2D Euclidean point distance
//! - Brute-force nearest-sampled-point scan
//!
//! These are reusable mathematical building blocks with no
//! algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean distance and nearest-point search.
pub mod distance;
