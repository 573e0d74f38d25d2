use crate::account::KEY_HEX_DIGITS;

use serde::Serialize;

/// Error types for account key synthesis
#[derive(Debug, thiserror::Error)]
pub enum KeygenError {
	#[error("Invalid seed: {0} does not fit the generator's 32-bit domain")]
	InvalidSeed(u64),

	#[error("Key conversion failure: {0}")]
	ConversionFailure(String),
}

/// A synthesized private key: exactly 64 lowercase hex characters.
///
/// Validated on construction and immutable afterwards. Only the shape is
/// checked; no curve-order validation is performed, so a well-formed string
/// is accepted even when downstream tooling would reject it as key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrivateKeyHex(String);

impl PrivateKeyHex {
	/// Validate and wrap a synthesized key string.
	pub fn new(key: String) -> Result<Self, KeygenError> {
		if key.len() != KEY_HEX_DIGITS {
			return Err(KeygenError::ConversionFailure(format!(
				"key is {} characters, expected {}",
				key.len(),
				KEY_HEX_DIGITS
			)));
		}

		if let Some((offset, found)) = key
			.chars()
			.enumerate()
			.find(|(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
		{
			return Err(KeygenError::ConversionFailure(format!(
				"non-hex character {found:?} at offset {offset}"
			)));
		}

		Ok(Self(key))
	}

	/// The key as a hex string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Decode the key into its 32 raw bytes.
	#[allow(dead_code)]
	pub fn to_bytes(&self) -> [u8; 32] {
		let raw = hex::decode(&self.0).expect("key validated on construction");
		raw.try_into().expect("key length validated on construction")
	}
}

impl std::fmt::Display for PrivateKeyHex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// The object handed to display consumers (QR renderers and the like).
///
/// Serializes with exactly one `privateKey` field so the JSON shape matches
/// what those consumers already accept.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
	#[serde(rename = "privateKey")]
	pub private_key: PrivateKeyHex,
}
