#![allow(clippy::module_name_repetitions)]

use crate::contracts::CollaboratorError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A label does not fit in the 62 single-byte characters a signal pair can carry.
	#[error("label {label:?} does not pack into {max} Latin-1 characters ({len} characters)")]
	InvalidLabelLength { label: String, len: usize, max: usize },

	#[error("malformed signal sequence: {0}")]
	MalformedSignalSequence(String),

	#[error("resolution key must be a string or an integer, got {0}")]
	InvalidResolutionKeyType(String),

	#[error("integer needs {bits} bits and does not fit in {width}")]
	IntegerTooWide { bits: usize, width: usize },

	#[error("invalid bit string: {0}")]
	InvalidBitString(String),

	#[error("invalid name {name:?}: {reason}")]
	InvalidName { name: String, reason: &'static str },

	#[error("resolver not set")]
	ResolverNotSet,

	#[error("domain expired at {expiry}")]
	DomainExpired { expiry: i64 },

	#[error("reverse resolution is not supported for record key {0}")]
	ReverseResolutionNotSupported(u64),

	#[error("unknown standard record {0:?}")]
	UnknownRecord(String),

	#[error(transparent)]
	Collaborator(#[from] CollaboratorError),
}

impl Error {
	/// Whether the failure came from deterministic local input and would fail
	/// again on retry.
	pub const fn is_local(&self) -> bool {
		!matches!(self, Self::Collaborator(_))
	}
}
