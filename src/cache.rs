use async_trait::async_trait;
use parking_lot::Mutex;
use ruint::aliases::U256;
use std::collections::HashMap;
use tracing::debug;

use crate::contracts::{CollaboratorError, TriadHasher};

/// Triad for the `avax` top-level label, the first step of every `.avax` name hash.
pub const AVAX_TRIAD: [U256; 3] = [
	U256::ZERO,
	U256::from_limbs([2_019_653_217, 0, 0, 0]),
	U256::ZERO,
];

/// `poseidon(AVAX_TRIAD)`.
pub const AVAX_TRIAD_HASH: U256 = U256::from_limbs([
	0xbeb8_7b74_20a3_d729,
	0x3574_1bb3_64a6_604f,
	0xeb59_19f1_d86f_f44a,
	0x0972_566a_becf_d569,
]);

/// Outputs known ahead of time. These never reach the hasher or the store.
pub const DEFAULT_PINS: [([U256; 3], U256); 1] = [(AVAX_TRIAD, AVAX_TRIAD_HASH)];

/// Memoizes a [`TriadHasher`].
///
/// Lookups check the pinned table first, then the memo store, and only then
/// call the wrapped hasher. The lock is never held across that call, so two
/// tasks may both compute a missing triad; both insert the same value.
pub struct HashCache<H> {
	hasher: H,
	memoize: bool,
	pins: HashMap<[U256; 3], U256>,
	store: Mutex<HashMap<[U256; 3], U256>>,
}

impl<H: TriadHasher> HashCache<H> {
	pub fn new(hasher: H) -> Self {
		Self {
			hasher,
			memoize: true,
			pins: DEFAULT_PINS.into_iter().collect(),
			store: Mutex::new(HashMap::new()),
		}
	}

	/// With memoization off only the pinned table is consulted.
	#[must_use]
	pub fn with_memoization(mut self, memoize: bool) -> Self {
		self.memoize = memoize;
		self
	}

	/// Adds pinned outputs. A pin must equal what the hasher returns for its triad.
	#[must_use]
	pub fn with_pins(mut self, pins: impl IntoIterator<Item = ([U256; 3], U256)>) -> Self {
		self.pins.extend(pins);
		self
	}

	pub fn clear(&self) {
		self.store.lock().clear();
	}

	pub fn len(&self) -> usize {
		self.store.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.store.lock().is_empty()
	}

	pub const fn inner(&self) -> &H {
		&self.hasher
	}
}

#[async_trait]
impl<H: TriadHasher> TriadHasher for HashCache<H> {
	async fn hash(&self, triad: [U256; 3]) -> Result<U256, CollaboratorError> {
		if let Some(output) = self.pins.get(&triad) {
			return Ok(*output);
		}

		if self.memoize {
			let cached = self.store.lock().get(&triad).copied();
			if let Some(output) = cached {
				debug!(output = %output, "triad hash cache hit");
				return Ok(output);
			}
		}

		let output = self.hasher.hash(triad).await?;
		debug!(output = %output, "triad hash cache miss");

		if self.memoize {
			self.store.lock().insert(triad, output);
		}

		Ok(output)
	}
}
