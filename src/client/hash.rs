use ruint::aliases::U256;
use std::fmt;
use tracing::{debug, instrument};

use super::{reverted_with, Client, Name, RAINBOW_ENTRY_NOT_FOUND};
use crate::{namehash::decode_signals, types::Result};

/// A name hash bound to a [`Client`], typically one whose name is not known yet.
#[derive(Clone, Copy)]
pub struct Hash<'a> {
	client: &'a Client,
	hash: U256,
}

impl<'a> Hash<'a> {
	pub(super) const fn new(client: &'a Client, hash: U256) -> Self {
		Self { client, hash }
	}

	pub const fn value(&self) -> U256 {
		self.hash
	}

	/// Recovers the name from its revealed preimage, `None` if it was never revealed.
	///
	/// # Errors
	///
	/// Errors if the rainbow table call fails or the revealed signals are malformed.
	#[instrument(skip(self), fields(hash = %self.hash), err)]
	pub async fn lookup(&self) -> Result<Option<Name<'a>>> {
		let rainbow_table = &self.client.contracts().rainbow_table;
		let signals = match self
			.client
			.call("rainbow_table", || rainbow_table.lookup(self.hash))
			.await
		{
			Ok(signals) => signals,
			Err(e) if reverted_with(&e, RAINBOW_ENTRY_NOT_FOUND) => {
				debug!("preimage not revealed");
				return Ok(None);
			},
			Err(e) => return Err(e.into()),
		};

		let name = decode_signals(&signals)?;
		Ok(Some(Name::revealed(self.client, name)))
	}
}

impl PartialEq for Hash<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.hash == other.hash
	}
}

impl fmt::Display for Hash<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.hash)
	}
}

impl fmt::Debug for Hash<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Hash").field(&self.hash).finish()
	}
}
