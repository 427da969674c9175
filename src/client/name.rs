use alloy::primitives::Address;
use chrono::Utc;
use ruint::aliases::U256;
use std::fmt;
use tracing::instrument;

use super::{reverted_with, Client, NONEXISTENT_TOKEN, RESOLVER_NOT_SET};
use crate::{
	contracts::ResolverEntry,
	namehash::encode_label,
	types::{Error, RecordKey, Result},
};

/// A lowercased dotted name bound to a [`Client`].
#[derive(Clone)]
pub struct Name<'a> {
	client: &'a Client,
	name: String,
	domain: String,
}

impl<'a> Name<'a> {
	pub(super) fn new(client: &'a Client, name: &str) -> Result<Self> {
		let name = name.to_lowercase();

		for label in name.split('.') {
			if label.is_empty() {
				return Err(Error::InvalidName {
					name: name.clone(),
					reason: "empty label",
				});
			}
			encode_label(label)?;
		}

		let domain = Self::domain_of(&name)?.to_string();

		Ok(Self {
			client,
			name,
			domain,
		})
	}

	/// Wraps a name decoded from a revealed preimage as is. A name with a single
	/// label is its own domain.
	pub(super) fn revealed(client: &'a Client, name: String) -> Self {
		let domain = Self::domain_of(&name).unwrap_or(name.as_str()).to_string();

		Self {
			client,
			name,
			domain,
		}
	}

	/// The second-level domain of `name`: its last two labels.
	///
	/// # Errors
	///
	/// Errors if `name` has fewer than two labels.
	pub fn domain_of(name: &str) -> Result<&str> {
		let mut dots = name.rmatch_indices('.').map(|(i, _)| i);
		if dots.next().is_none() {
			return Err(Error::InvalidName {
				name: name.to_string(),
				reason: "a name needs at least two labels",
			});
		}

		Ok(dots.next().map_or(name, |i| &name[i + 1..]))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn domain(&self) -> &str {
		&self.domain
	}

	/// # Errors
	///
	/// Errors if the hasher fails.
	pub async fn hash(&self) -> Result<U256> {
		self.client.name_hash(&self.name).await
	}

	/// # Errors
	///
	/// Errors if the hasher fails.
	pub async fn domain_hash(&self) -> Result<U256> {
		self.client.name_hash(&self.domain).await
	}

	/// Expiry of the second-level domain, in seconds since the epoch.
	///
	/// # Errors
	///
	/// Errors if hashing or the domain contract fails.
	pub async fn expiry(&self) -> Result<i64> {
		let domain_hash = self.domain_hash().await?;
		let domain = &self.client.contracts().domain;

		Ok(self.client.call("expiry", || domain.expiry(domain_hash)).await?)
	}

	/// # Errors
	///
	/// Errors if hashing or the domain contract fails.
	pub async fn is_expired(&self) -> Result<bool> {
		Ok(Utc::now().timestamp() >= self.expiry().await?)
	}

	/// Current owner of the second-level domain, `None` if it was never registered.
	///
	/// # Errors
	///
	/// Errors if hashing or the domain contract fails.
	#[instrument(skip(self), fields(name = %self.name), err)]
	pub async fn registrant(&self) -> Result<Option<Address>> {
		let domain_hash = self.domain_hash().await?;
		let domain = &self.client.contracts().domain;

		match self.client.call("owner_of", || domain.owner_of(domain_hash)).await {
			Ok(owner) => Ok(Some(owner)),
			Err(e) if NONEXISTENT_TOKEN.iter().any(|reason| reverted_with(&e, reason)) => Ok(None),
			Err(e) => Err(e.into()),
		}
	}

	/// Resolves a record of this name.
	///
	/// Integer keys are standard records (see [`Client::records`]), string keys
	/// are custom records.
	///
	/// # Errors
	///
	/// Errors with [`Error::DomainExpired`] if the domain has expired,
	/// [`Error::ResolverNotSet`] if the name has no resolver, or with the
	/// underlying failure of any contract call.
	pub async fn resolve(&self, key: impl Into<RecordKey> + Send) -> Result<String> {
		self.resolve_key(key.into()).await
	}

	#[instrument(skip(self, key), fields(name = %self.name, key = %key), err)]
	async fn resolve_key(&self, key: RecordKey) -> Result<String> {
		let expiry = self.expiry().await?;
		if Utc::now().timestamp() >= expiry {
			return Err(Error::DomainExpired { expiry });
		}

		let hash = self.hash().await?;
		let entry = self.resolver(hash).await?;
		let resolver = &self.client.contracts().resolver;

		let value = match key {
			RecordKey::Standard(key) => {
				self.client
					.call("resolve_standard", || {
						resolver.resolve_standard(entry.resolver, entry.dataset_id, hash, key)
					})
					.await?
			},
			RecordKey::Custom(key) => {
				self.client
					.call("resolve_custom", || {
						resolver.resolve_custom(entry.resolver, entry.dataset_id, hash, &key)
					})
					.await?
			},
		};

		Ok(value)
	}

	async fn resolver(&self, hash: U256) -> Result<ResolverEntry> {
		let domain_hash = self.domain_hash().await?;
		let registry = &self.client.contracts().resolver_registry;

		self.client
			.call("resolver_registry", || registry.get(domain_hash, hash))
			.await
			.map_err(|e| {
				if reverted_with(&e, RESOLVER_NOT_SET) {
					Error::ResolverNotSet
				} else {
					e.into()
				}
			})
	}
}

impl fmt::Display for Name<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

impl fmt::Debug for Name<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Name")
			.field("name", &self.name)
			.field("domain", &self.domain)
			.finish_non_exhaustive()
	}
}
