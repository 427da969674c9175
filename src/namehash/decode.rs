use ruint::aliases::U256;

use super::{
	bits::{bits_to_integer, integer_to_bits},
	label::SIGNAL_BITS,
};
use crate::types::{Error, Result};

/// Reconstructs a dotted name from revealed preimage signals.
///
/// Signals come in chain order, i.e. the pair for the top-level label first.
/// Each byte is the character with that code point (U+0000 to U+00FF). Zero
/// bytes are skipped wherever they appear, so a label containing a NUL byte
/// does not survive the round trip.
///
/// Each signal of a pair is bit-reversed on its own rather than reversing the
/// pair as one 496-bit string, which would swap the halves of labels longer
/// than 31 characters and break the round trip with [`super::pack_label`].
///
/// # Errors
///
/// Errors with [`Error::MalformedSignalSequence`] if the sequence has odd length
/// or a signal is wider than 248 bits.
pub fn decode_signals(signals: &[U256]) -> Result<String> {
	if signals.len() % 2 != 0 {
		return Err(Error::MalformedSignalSequence(format!(
			"expected an even number of signals, got {}",
			signals.len()
		)));
	}

	let mut labels = signals
		.chunks_exact(2)
		.map(|pair| decode_label(pair[0], pair[1]))
		.collect::<Result<Vec<_>>>()?;
	labels.reverse();

	Ok(labels.join("."))
}

fn decode_label(low: U256, high: U256) -> Result<String> {
	let mut bytes = decode_half(low)?;
	bytes.extend(decode_half(high)?);

	Ok(bytes.into_iter().map(char::from).collect())
}

/// Non-zero bytes of one signal, first byte of the label half first.
fn decode_half(signal: U256) -> Result<Vec<u8>> {
	let bits = integer_to_bits(signal, SIGNAL_BITS).map_err(|_| {
		Error::MalformedSignalSequence(format!("signal {signal} is wider than {SIGNAL_BITS} bits"))
	})?;

	let mut bytes = Vec::with_capacity(SIGNAL_BITS / 8);
	for chunk in bits.as_bytes().chunks(8) {
		let byte = std::str::from_utf8(chunk)
			.map_err(|e| Error::MalformedSignalSequence(e.to_string()))
			.and_then(bits_to_integer)?;
		if byte != U256::ZERO {
			bytes.push(byte.to::<u8>());
		}
	}
	bytes.reverse();

	Ok(bytes)
}
