//! Hashers shared by the unit tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use ruint::aliases::U256;

use crate::contracts::{CollaboratorError, TriadHasher};

/// Cheap order-sensitive mixing, good enough to tell fold orders apart.
pub struct MixHasher;

impl MixHasher {
	pub fn mix([a, b, c]: [U256; 3]) -> U256 {
		a.wrapping_mul(U256::from(1_000_003))
			.wrapping_add(b.wrapping_mul(U256::from(7919)))
			.wrapping_add(c.wrapping_mul(U256::from(31)))
			.wrapping_add(U256::from(1))
	}
}

#[async_trait]
impl TriadHasher for MixHasher {
	async fn hash(&self, triad: [U256; 3]) -> Result<U256, CollaboratorError> {
		Ok(Self::mix(triad))
	}
}

/// Records every triad passed to the wrapped hasher.
pub struct RecordingHasher<H> {
	inner: H,
	calls: Mutex<Vec<[U256; 3]>>,
}

impl<H> RecordingHasher<H> {
	pub fn new(inner: H) -> Self {
		Self {
			inner,
			calls: Mutex::new(Vec::new()),
		}
	}

	pub fn calls(&self) -> Vec<[U256; 3]> {
		self.calls.lock().clone()
	}
}

#[async_trait]
impl<H: TriadHasher> TriadHasher for RecordingHasher<H> {
	async fn hash(&self, triad: [U256; 3]) -> Result<U256, CollaboratorError> {
		self.calls.lock().push(triad);
		self.inner.hash(triad).await
	}
}

pub struct FailingHasher(CollaboratorError);

impl FailingHasher {
	pub fn transport() -> Self {
		Self(CollaboratorError::Transport("connection refused".to_string()))
	}
}

#[async_trait]
impl TriadHasher for FailingHasher {
	async fn hash(&self, _triad: [U256; 3]) -> Result<U256, CollaboratorError> {
		Err(self.0.clone())
	}
}
