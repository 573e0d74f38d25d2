//!
//! Utility module for the account generator.
//!
//! Re-exports formatting helpers shared by the key synthesizer and the digit audit.
/// Numeric-to-text conversion helpers
pub mod index;

pub use index::fraction_hex_digits;
