use serde::{Deserialize, Serialize};

/// The consumer a token is scoped to, carried in the `aud` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
	/// Browser overlay sources; read-only event streams.
	Overlay,
	/// Administrative endpoints.
	Admin,
}

impl Audience {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Overlay => "overlay",
			Self::Admin => "admin",
		}
	}
}

/// The audience string was not `overlay` or `admin`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid audience: {0} (expected `overlay` or `admin`)")]
pub struct InvalidAudience(pub String);

impl std::str::FromStr for Audience {
	type Err = InvalidAudience;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"overlay" => Ok(Self::Overlay),
			"admin" => Ok(Self::Admin),
			other => Err(InvalidAudience(other.to_string())),
		}
	}
}

impl std::fmt::Display for Audience {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.as_str().fmt(f)
	}
}
