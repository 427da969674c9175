use ruint::aliases::U256;
use serde_json::Value;
use std::fmt;

use super::error::Error;

/// Key passed to [`crate::Name::resolve`].
///
/// Integers address the standard record catalog, strings address custom
/// records set by the name owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
	Standard(U256),
	Custom(String),
}

impl fmt::Display for RecordKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Standard(key) => write!(f, "standard:{key}"),
			Self::Custom(key) => write!(f, "custom:{key}"),
		}
	}
}

impl From<u64> for RecordKey {
	fn from(key: u64) -> Self {
		Self::Standard(U256::from(key))
	}
}

impl From<U256> for RecordKey {
	fn from(key: U256) -> Self {
		Self::Standard(key)
	}
}

impl From<&str> for RecordKey {
	fn from(key: &str) -> Self {
		Self::Custom(key.to_string())
	}
}

impl From<String> for RecordKey {
	fn from(key: String) -> Self {
		Self::Custom(key)
	}
}

impl TryFrom<Value> for RecordKey {
	type Error = Error;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::String(key) => Ok(Self::Custom(key)),
			Value::Number(ref n) => n
				.as_u64()
				.map(Self::from)
				.ok_or_else(|| Error::InvalidResolutionKeyType(format!("number {n}"))),
			Value::Null => Err(Error::InvalidResolutionKeyType("null".to_string())),
			Value::Bool(_) => Err(Error::InvalidResolutionKeyType("boolean".to_string())),
			Value::Array(_) => Err(Error::InvalidResolutionKeyType("array".to_string())),
			Value::Object(_) => Err(Error::InvalidResolutionKeyType("object".to_string())),
		}
	}
}
