//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and orchestrates the matching pipeline:
//! - Fail-fast precondition checks (`Validator`)
//! - The `MatchSession` driver: ordered matching, tolerance derivation, and
//!   ordered assignment passes
//! - The `MatchReport` handed to persistence and plotting collaborators
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;

/// Pipeline orchestration.
pub mod session;

/// Aggregated pipeline output.
pub mod report;
