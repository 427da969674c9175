use ruint::aliases::U256;

use crate::types::{Error, Result};

/// Renders `n` as exactly `width` binary digits, most significant first.
///
/// # Errors
///
/// Errors if `n` needs more than `width` bits.
pub fn integer_to_bits(n: U256, width: usize) -> Result<String> {
	let bits = n.bit_len();
	if bits > width {
		return Err(Error::IntegerTooWide { bits, width });
	}

	Ok((0..width)
		.rev()
		.map(|i| if i < bits && n.bit(i) { '1' } else { '0' })
		.collect())
}

/// Parses a big-endian string of binary digits.
///
/// # Errors
///
/// Errors on an empty string, a digit other than `0`/`1`, or a value wider than 256 bits.
pub fn bits_to_integer(bits: &str) -> Result<U256> {
	if bits.is_empty() {
		return Err(Error::InvalidBitString("empty".to_string()));
	}

	bits.chars().try_fold(U256::ZERO, |acc, c| {
		let bit = match c {
			'0' => false,
			'1' => true,
			other => return Err(Error::InvalidBitString(format!("unexpected digit {other:?}"))),
		};
		if acc.bit(U256::BITS - 1) {
			return Err(Error::InvalidBitString(format!(
				"value overflows {} bits",
				U256::BITS
			)));
		}

		let mut next = acc << 1_usize;
		next.set_bit(0, bit);
		Ok(next)
	})
}
