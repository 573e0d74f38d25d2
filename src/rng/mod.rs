//! Key-stream generator for legacy browser-minted accounts
//!
//! This module holds the seeded recurrence that legacy front-ends used in
//! place of a secure randomness source, plus the audit tooling that
//! characterizes its (weak) output quality.

/// The seeded square-and-OR recurrence
mod webkit;

/// Digit-distribution and cycle characterization for the generator
pub mod quality;

pub use webkit::WebkitRng;
