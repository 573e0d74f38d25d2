/// Key synthesis builder and fraction source seam
pub mod synthesizer;
/// Account and key types plus their validation errors
pub mod types;

pub use synthesizer::PrivateKeyBuilder;
pub use types::*;

/// Width of a synthesized private key, in hex digits.
pub const KEY_HEX_DIGITS: usize = 64;

/// Number of fractions pulled from the generator per key.
pub const KEY_FRAGMENT_ROUNDS: usize = 8;

/// Synthesizes one account from a freshly seeded generator.
pub fn generate_account() -> Result<Account, KeygenError> {
	PrivateKeyBuilder::new().build()
}
