#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Client for Avvy Domains (`.avax`) names.
//!
//! Names are keyed on chain by a name hash built from a 3-input hash
//! (Poseidon on BN254), see [`namehash`]. The hash primitive and every contract
//! are injected through the traits in [`contracts`], so the crate carries no
//! transport of its own.
//!
//! ```no_run
//! # async fn run(client: avvy_client::Client) -> avvy_client::Result<()> {
//! let name = client.name("avvy-client-common-testing.avax")?;
//! let evm = client.records().key("EVM")?;
//! let address = name.resolve(evm).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod contracts;
pub mod namehash;
#[cfg(feature = "poseidon")]
pub mod poseidon;
pub mod records;
#[cfg(test)]
mod testing;
mod types;

pub use cache::HashCache;
pub use client::{Client, Contracts, Hash, Name};
pub use config::Config;
pub use contracts::{CollaboratorError, ResolverEntry, TriadHasher};
pub use records::{Record, Records};
pub use types::{Error, RecordKey, Result};
