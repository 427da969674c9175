use ruint::aliases::U256;

use super::bits::{bits_to_integer, integer_to_bits};
use crate::types::{Error, Result};

/// Bytes a single label is padded to.
pub const LABEL_LEN: usize = 62;
/// Bytes carried by one preimage signal.
pub const HALF_LEN: usize = LABEL_LEN / 2;
/// Width of one preimage signal.
pub const SIGNAL_BITS: usize = HALF_LEN * 8;

/// The two preimage signals encoding one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalPair {
	/// Bytes `0..31` of the padded label.
	pub low: U256,
	/// Bytes `31..62` of the padded label.
	pub high: U256,
}

impl SignalPair {
	pub const fn to_array(self) -> [U256; 2] {
		[self.low, self.high]
	}
}

/// Bytes of a label, one per character.
///
/// Only characters up to U+00FF have a single-byte form, so a label is
/// limited to Latin-1.
///
/// # Errors
///
/// Errors with [`Error::InvalidLabelLength`] if the label has more than
/// [`LABEL_LEN`] characters or a character above U+00FF.
pub fn encode_label(label: &str) -> Result<Vec<u8>> {
	let invalid = || Error::InvalidLabelLength {
		label: label.to_string(),
		len: label.chars().count(),
		max: LABEL_LEN,
	};

	let bytes = label
		.chars()
		.map(|c| u8::try_from(u32::from(c)))
		.collect::<Result<Vec<_>, _>>()
		.map_err(|_| invalid())?;
	if bytes.len() > LABEL_LEN {
		return Err(invalid());
	}

	Ok(bytes)
}

/// Packs a label into its preimage signals.
///
/// The label's bytes (see [`encode_label`]) are zero-padded at the end to
/// [`LABEL_LEN`] and split in two halves. Each half becomes one integer whose
/// least significant byte is the first byte of the half.
///
/// The empty label packs to `(0, 0)`.
///
/// # Errors
///
/// Errors with [`Error::InvalidLabelLength`] if the label cannot be encoded.
pub fn pack_label(label: &str) -> Result<SignalPair> {
	let bytes = encode_label(label)?;

	let mut padded = [0u8; LABEL_LEN];
	padded[..bytes.len()].copy_from_slice(&bytes);
	let (low, high) = padded.split_at(HALF_LEN);

	Ok(SignalPair {
		low: pack_half(low)?,
		high: pack_half(high)?,
	})
}

fn pack_half(half: &[u8]) -> Result<U256> {
	let mut bits = String::with_capacity(SIGNAL_BITS);
	for byte in half.iter().rev() {
		bits.push_str(&integer_to_bits(U256::from(*byte), 8)?);
	}

	bits_to_integer(&bits)
}
