//! Seams to the on-chain contracts the client talks to.
//!
//! Every trait here is implemented outside this crate on top of whatever
//! transport the caller uses. Reverts must be reported as
//! [`CollaboratorError::Reverted`] carrying the revert reason, since the client
//! recognises a few well-known reasons and turns them into typed outcomes.

use alloy::primitives::Address;
use async_trait::async_trait;
use ruint::aliases::U256;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
	#[error("execution reverted: {0}")]
	Reverted(String),
	#[error("transport error: {0}")]
	Transport(String),
}

impl CollaboratorError {
	pub const fn is_transient(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}

/// The fixed-arity (3 in, 1 out) hash primitive the name hash is built from.
#[async_trait]
pub trait TriadHasher: Send + Sync {
	async fn hash(&self, triad: [U256; 3]) -> Result<U256, CollaboratorError>;
}

#[async_trait]
impl<T: TriadHasher + ?Sized> TriadHasher for std::sync::Arc<T> {
	async fn hash(&self, triad: [U256; 3]) -> Result<U256, CollaboratorError> {
		(**self).hash(triad).await
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverEntry {
	pub resolver: Address,
	pub dataset_id: U256,
}

#[async_trait]
pub trait ResolverRegistry: Send + Sync {
	async fn get(&self, domain_hash: U256, hash: U256) -> Result<ResolverEntry, CollaboratorError>;
}

#[async_trait]
pub trait Resolver: Send + Sync {
	async fn resolve_standard(
		&self,
		resolver: Address,
		dataset_id: U256,
		hash: U256,
		key: U256,
	) -> Result<String, CollaboratorError>;

	async fn resolve_custom(
		&self,
		resolver: Address,
		dataset_id: U256,
		hash: U256,
		key: &str,
	) -> Result<String, CollaboratorError>;
}

#[async_trait]
pub trait DomainRegistry: Send + Sync {
	/// Expiry of a second-level domain, in seconds since the epoch.
	async fn expiry(&self, domain_hash: U256) -> Result<i64, CollaboratorError>;
	async fn owner_of(&self, domain_hash: U256) -> Result<Address, CollaboratorError>;
}

/// Lookup table of revealed preimages.
#[async_trait]
pub trait RainbowTable: Send + Sync {
	async fn lookup(&self, hash: U256) -> Result<Vec<U256>, CollaboratorError>;
}

/// Maps a record value (e.g. an EVM address) back to the name hash that claims it.
#[async_trait]
pub trait ReverseResolver: Send + Sync {
	async fn lookup(&self, value: &str) -> Result<Option<U256>, CollaboratorError>;
}
