mod hash;
mod name;

use backon::{ExponentialBuilder, Retryable};
use futures::future::try_join_all;
use ruint::aliases::U256;
use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};
use tracing::{instrument, warn};

pub use hash::Hash;
pub use name::Name;

use crate::{
	cache::HashCache,
	config::{self, Config},
	contracts::{
		CollaboratorError, DomainRegistry, RainbowTable, Resolver, ResolverRegistry,
		ReverseResolver, TriadHasher,
	},
	namehash,
	records::Records,
	types::{Error, Result},
};

/// Revert reason of `ResolverRegistry.get` for names without a resolver.
pub const RESOLVER_NOT_SET: &str = "ResolverRegistry: resolver not set";
/// Revert reason of `RainbowTable.lookup` for hashes that were never revealed.
pub const RAINBOW_ENTRY_NOT_FOUND: &str = "RainbowTableV1: entry not found";
/// Revert reasons of `ownerOf` for domains that were never minted.
pub const NONEXISTENT_TOKEN: [&str; 2] = [
	"ERC721: owner query for nonexistent token",
	"ERC721: invalid token ID",
];

/// The contracts a [`Client`] resolves against.
pub struct Contracts {
	pub resolver_registry: Arc<dyn ResolverRegistry>,
	pub resolver: Arc<dyn Resolver>,
	pub domain: Arc<dyn DomainRegistry>,
	pub rainbow_table: Arc<dyn RainbowTable>,
	/// Reverse resolvers keyed by the standard record they reverse.
	pub reverse_resolvers: HashMap<u64, Arc<dyn ReverseResolver>>,
}

pub struct Client {
	config: Config,
	records: Records,
	cache: HashCache<Arc<dyn TriadHasher>>,
	contracts: Contracts,
}

impl Client {
	/// # Errors
	///
	/// Errors if the configured record catalog cannot be loaded.
	pub fn new(
		config: Config,
		hasher: Arc<dyn TriadHasher>,
		contracts: Contracts,
	) -> Result<Self, config::Error> {
		let records = config.records()?;
		let cache = HashCache::new(hasher).with_memoization(config.hash_cache);

		Ok(Self {
			config,
			records,
			cache,
			contracts,
		})
	}

	/// Chain the client was configured for. The client never reads it; callers
	/// use it to pick the deployments they wire into [`Contracts`].
	pub const fn chain_id(&self) -> u64 {
		self.config.chain_id
	}

	pub const fn config(&self) -> &Config {
		&self.config
	}

	/// The standard record catalog, e.g. `client.records().key("EVM")`.
	pub const fn records(&self) -> &Records {
		&self.records
	}

	pub const fn hash_cache(&self) -> &HashCache<Arc<dyn TriadHasher>> {
		&self.cache
	}

	pub fn clear_hash_cache(&self) {
		self.cache.clear();
	}

	/// # Errors
	///
	/// Errors if `name` has fewer than two labels or an empty label, or if a label
	/// cannot be packed (see [`namehash::encode_label`]).
	pub fn name(&self, name: &str) -> Result<Name<'_>> {
		Name::new(self, name)
	}

	pub const fn hash(&self, hash: U256) -> Hash<'_> {
		Hash::new(self, hash)
	}

	/// Name hash of `name`, memoized per triad.
	///
	/// # Errors
	///
	/// Errors if a label cannot be packed, or if the hasher fails.
	pub async fn name_hash(&self, name: &str) -> Result<U256> {
		namehash::fold_name(name, &self.cache).await
	}

	/// Hashes several names concurrently. Each name is still folded label by label.
	///
	/// # Errors
	///
	/// Errors with the first failure among `names`.
	pub async fn name_hashes(&self, names: &[&str]) -> Result<Vec<U256>> {
		try_join_all(names.iter().map(|name| self.name_hash(name))).await
	}

	/// # Errors
	///
	/// See [`namehash::decode_signals`].
	pub fn decode_signals(&self, signals: &[U256]) -> Result<String> {
		namehash::decode_signals(signals)
	}

	/// Finds the name that claims `value` for the standard record `key`.
	///
	/// # Errors
	///
	/// Errors with [`Error::ReverseResolutionNotSupported`] if no reverse resolver
	/// is registered for `key`.
	#[instrument(skip(self), err)]
	pub async fn reverse(&self, key: u64, value: &str) -> Result<Option<Hash<'_>>> {
		let resolver = self
			.contracts
			.reverse_resolvers
			.get(&key)
			.ok_or(Error::ReverseResolutionNotSupported(key))?;

		let hash = self.call("reverse", || resolver.lookup(value)).await?;

		Ok(hash.map(|hash| self.hash(hash)))
	}

	pub(crate) const fn contracts(&self) -> &Contracts {
		&self.contracts
	}

	/// Runs a collaborator call, retrying transport failures.
	pub(crate) async fn call<T, F, Fut>(
		&self,
		operation: &'static str,
		call: F,
	) -> Result<T, CollaboratorError>
	where
		F: FnMut() -> Fut,
		Fut: Future<Output = Result<T, CollaboratorError>>,
	{
		let policy = ExponentialBuilder::default()
			.with_min_delay(Duration::from_millis(100))
			.with_max_delay(Duration::from_secs(2))
			.with_jitter()
			.with_max_times(self.config.retry_attempts);

		call.retry(policy)
			.sleep(tokio::time::sleep)
			.when(CollaboratorError::is_transient)
			.notify(|err, after| {
				warn!(operation, error = %err, "collaborator call failed, retrying in {after:?}");
			})
			.await
	}
}

/// Whether `err` is a revert whose reason contains `reason`.
pub(crate) fn reverted_with(err: &CollaboratorError, reason: &str) -> bool {
	matches!(err, CollaboratorError::Reverted(message) if message.contains(reason))
}
