use hmac::{Hmac, Mac};
use sha2::Sha256;

/// The hex-encoded signing key could not be decoded, ex. an odd number of
/// digits or a non-hex character.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid key hex: {0}")]
pub struct KeyFormatError(#[from] hex::FromHexError);

/// HMAC-SHA256 signing material.
///
/// The bytes are opaque and any length is accepted; HMAC pads or hashes the
/// key internally as needed.
#[derive(Clone, PartialEq, Eq)]
pub struct Key(Vec<u8>);

impl Key {
	/// Decode a key from a hex string.
	pub fn from_hex(hex: &str) -> Result<Self, KeyFormatError> {
		Ok(Self(hex::decode(hex)?))
	}

	/// Use raw bytes as the key directly.
	pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
		Self(bytes.into())
	}

	/// HMAC-SHA256 over the input, returning the raw 32-byte digest.
	pub(crate) fn sign(&self, input: &[u8]) -> Vec<u8> {
		let mut mac = Hmac::<Sha256>::new_from_slice(&self.0).expect("HMAC accepts any key length");
		mac.update(input);
		mac.finalize().into_bytes().to_vec()
	}
}

// Don't leak key material into logs.
impl std::fmt::Debug for Key {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Key({} bytes)", self.0.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_hex() {
		let key = Key::from_hex("6465762d7373652d7365637265742d6368616e67652d6d65").unwrap();
		assert_eq!(key, Key::from_bytes(&b"dev-sse-secret-change-me"[..]));
	}

	#[test]
	fn test_from_hex_odd_length() {
		assert!(Key::from_hex("abc").is_err());
	}

	#[test]
	fn test_from_hex_invalid_digit() {
		assert!(Key::from_hex("zz").is_err());
		assert!(Key::from_hex("0g").is_err());
	}

	#[test]
	fn test_from_hex_empty() {
		// An empty hex string is a valid (if useless) zero-length key.
		assert!(Key::from_hex("").is_ok());
	}

	#[test]
	fn test_debug_redacts() {
		let key = Key::from_bytes(&b"secret"[..]);
		assert_eq!(format!("{:?}", key), "Key(6 bytes)");
	}
}
