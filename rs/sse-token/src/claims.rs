use serde::{Deserialize, Serialize};

use crate::Audience;

/// The JWT payload: subject, audience and the validity window.
///
/// Fields are declared in lexicographic claim-name order and serde emits
/// struct fields in declaration order, so the serialized JSON has sorted keys
/// with no extra whitespace. Two logically equal claim sets always encode to
/// the same bytes, which keeps the signature reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
	/// The audience the token is valid for.
	pub aud: Audience,

	/// Expiry, in seconds since the unix epoch.
	pub exp: i64,

	/// Issuance time, in seconds since the unix epoch.
	pub iat: i64,

	/// Optional not-before time, in seconds since the unix epoch.
	///
	/// Absent from the encoded payload when `None`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nbf: Option<i64>,

	/// The subject, ex. a broadcaster ID. Passed through verbatim.
	pub sub: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_canonical_encoding() {
		let claims = Claims {
			aud: Audience::Overlay,
			exp: 1700000600,
			iat: 1700000000,
			nbf: None,
			sub: "broadcaster42".to_string(),
		};

		let json = serde_json::to_string(&claims).unwrap();
		assert_eq!(
			json,
			r#"{"aud":"overlay","exp":1700000600,"iat":1700000000,"sub":"broadcaster42"}"#
		);
	}

	#[test]
	fn test_nbf_present() {
		let claims = Claims {
			aud: Audience::Admin,
			exp: 30,
			iat: 20,
			nbf: Some(10),
			sub: "ops".to_string(),
		};

		let json = serde_json::to_string(&claims).unwrap();
		assert_eq!(json, r#"{"aud":"admin","exp":30,"iat":20,"nbf":10,"sub":"ops"}"#);
	}

	#[test]
	fn test_roundtrip() {
		let claims = Claims {
			aud: Audience::Overlay,
			exp: 2,
			iat: 1,
			nbf: Some(-5),
			sub: "sub".to_string(),
		};

		let json = serde_json::to_string(&claims).unwrap();
		let decoded: Claims = serde_json::from_str(&json).unwrap();
		assert_eq!(decoded, claims);
	}
}
