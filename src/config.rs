use anyhow::Context;
use std::{
	env::{self, VarError},
	path::PathBuf,
};

use crate::records::Records;

/// Avalanche C-Chain.
pub const DEFAULT_CHAIN_ID: u64 = 43114;
pub const DEFAULT_RETRY_ATTEMPTS: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
	/// Chain the contracts are deployed on.
	pub chain_id: u64,
	/// Memoize triad hashes for the lifetime of the client.
	pub hash_cache: bool,
	/// How many times a collaborator call is retried after a transport error.
	pub retry_attempts: usize,
	/// Record catalog to load instead of the bundled one.
	pub records_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Env(#[from] VarError),
	#[error(transparent)]
	EnvWithContext(#[from] anyhow::Error),
}

impl Default for Config {
	fn default() -> Self {
		Self {
			chain_id: DEFAULT_CHAIN_ID,
			hash_cache: true,
			retry_attempts: DEFAULT_RETRY_ATTEMPTS,
			records_path: None,
		}
	}
}

impl Config {
	/// Reads `AVVY_CHAIN_ID`, `AVVY_HASH_CACHE`, `AVVY_RETRY_ATTEMPTS` and
	/// `AVVY_RECORDS_PATH`, falling back to the defaults for unset variables.
	///
	/// # Errors
	///
	/// Errors if a variable is set but cannot be parsed.
	pub fn from_env() -> Result<Self, Error> {
		dotenvy::dotenv().ok();
		Self::from_lookup(|key| env::var(key))
	}

	fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> Result<Self, Error> {
		let var = |key: &str| match lookup(key) {
			Ok(value) => Ok(Some(value)),
			Err(VarError::NotPresent) => Ok(None),
			Err(e) => Err(Error::Env(e)),
		};

		let defaults = Self::default();

		Ok(Self {
			chain_id: var("AVVY_CHAIN_ID")?
				.map(|v| v.parse::<u64>().context("AVVY_CHAIN_ID must be an integer"))
				.transpose()?
				.unwrap_or(defaults.chain_id),
			hash_cache: var("AVVY_HASH_CACHE")?
				.map(|v| v.parse::<bool>().context("AVVY_HASH_CACHE must be true or false"))
				.transpose()?
				.unwrap_or(defaults.hash_cache),
			retry_attempts: var("AVVY_RETRY_ATTEMPTS")?
				.map(|v| v.parse::<usize>().context("AVVY_RETRY_ATTEMPTS must be an integer"))
				.transpose()?
				.unwrap_or(defaults.retry_attempts),
			records_path: var("AVVY_RECORDS_PATH")?.map(PathBuf::from),
		})
	}

	/// Loads the configured record catalog.
	///
	/// # Errors
	///
	/// Errors if `records_path` is set and the file is unreadable or invalid.
	pub fn records(&self) -> Result<Records, Error> {
		self.records_path.as_ref().map_or_else(
			|| Ok(Records::standard()),
			|path| {
				Records::from_file(path)
					.with_context(|| format!("failed to load record catalog {}", path.display()))
					.map_err(Error::from)
			},
		)
	}
}
