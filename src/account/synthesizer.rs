//! Private key synthesizer
//!
//! This module provides a builder pattern for assembling nominal Ethereum
//! private keys out of unit-interval fractions, following the legacy
//! in-browser account generator byte for byte.

use crate::account::{Account, KEY_FRAGMENT_ROUNDS, KEY_HEX_DIGITS, KeygenError, PrivateKeyHex};
use crate::rng::WebkitRng;
use crate::utils::fraction_hex_digits;

/// Trait for sources of unit-interval fractions
pub trait FractionSource {
	/// Pull the next fraction in `[0, 1)`
	fn next_fraction(&mut self) -> f64;

	/// Get the name of this source
	fn name(&self) -> &'static str;
}

impl FractionSource for WebkitRng {
	fn next_fraction(&mut self) -> f64 {
		self.next_fraction()
	}

	fn name(&self) -> &'static str {
		"WebkitRng"
	}
}

/// Builder for synthesizing private keys from a fraction source
pub struct PrivateKeyBuilder {
	/// Explicit generator seed, applied to the built-in generator
	seed: Option<u64>,
	/// Fraction source replacing the built-in generator
	source: Option<Box<dyn FractionSource>>,
}

impl PrivateKeyBuilder {
	/// Creates a new key builder
	pub fn new() -> Self {
		Self {
			seed: None,
			source: None,
		}
	}

	/// Sets the generator seed
	///
	/// The seed must fit the generator's 32-bit domain; `build` rejects
	/// anything above `u32::MAX`. It only applies to the built-in generator
	/// and is ignored when a custom source is installed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Sets a custom fraction source
	#[allow(dead_code)]
	pub fn with_source(mut self, source: Box<dyn FractionSource>) -> Self {
		self.source = Some(source);
		self
	}

	/// Builds the final key by pulling eight fractions from the source
	pub fn build(self) -> Result<Account, KeygenError> {
		let mut source: Box<dyn FractionSource> = match self.source {
			Some(source) => source,
			None => {
				let mut rng = WebkitRng::new();
				match self.seed {
					Some(seed) => {
						let seed =
							u32::try_from(seed).map_err(|_| KeygenError::InvalidSeed(seed))?;
						rng.set_seed(Some(seed));
					}
					None => rng.set_seed(None),
				}
				Box::new(rng)
			}
		};

		log::info!("Synthesizing private key from source {}", source.name());

		let mut key = String::with_capacity(KEY_HEX_DIGITS);
		for round in 1..=KEY_FRAGMENT_ROUNDS {
			let fraction = source.next_fraction();
			let fragment = fraction_hex_digits(fraction);
			log::debug!(
				"Fragment {}/{}: {} hex digits",
				round,
				KEY_FRAGMENT_ROUNDS,
				fragment.len()
			);
			key.push_str(&fragment);
		}

		let raw_digits = key.len();

		// Left-pad short keys with zeros, then cut down to the fixed width.
		// Fragments are ASCII hex, so byte truncation lands on a character
		// boundary.
		if raw_digits < KEY_HEX_DIGITS {
			key = format!("{:0>width$}", key, width = KEY_HEX_DIGITS);
		} else {
			key.truncate(KEY_HEX_DIGITS);
		}

		log::info!(
			"Synthesized {} hex digit key ({} raw digits before padding)",
			KEY_HEX_DIGITS,
			raw_digits
		);

		let private_key = PrivateKeyHex::new(key)?;
		Ok(Account { private_key })
	}
}

impl Default for PrivateKeyBuilder {
	fn default() -> Self {
		Self::new()
	}
}
