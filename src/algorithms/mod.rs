//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the three core operations of the matching pipeline:
//! - Least-squares candidate selection
//! - Tolerance derivation from the worst training deviation
//! - Tolerance-gated assignment of observation points
//!
//! Each operation is a free function over the primitive data model; "ideal"
//! and "test" roles are call-site distinctions, not types.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares candidate selection.
pub mod selection;

/// Acceptance tolerance derivation.
pub mod tolerance;

/// Tolerance-gated point assignment.
pub mod assignment;
