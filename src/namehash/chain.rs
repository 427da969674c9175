use ruint::aliases::U256;
use tracing::trace;

use super::label::pack_label;
use crate::{contracts::TriadHasher, types::Result};

/// Computes the name hash of a dotted name.
///
/// The name is lowercased and split on `.`, then folded right to left: starting
/// from `0`, every label replaces the running hash with
/// `hasher([running, low, high])`. Empty labels (`a..b`, leading or trailing
/// dots) fold in as `(0, 0)`.
///
/// # Errors
///
/// Errors if a label is longer than 62 bytes, or if the hasher fails.
pub async fn fold_name<H: TriadHasher + ?Sized>(name: &str, hasher: &H) -> Result<U256> {
	let name = name.to_lowercase();
	let labels: Vec<&str> = name.split('.').collect();

	fold_labels(&labels, hasher).await
}

/// Folds labels given in written order (most specific first).
///
/// Labels are hashed as given, without case normalisation.
///
/// # Errors
///
/// Errors if a label is longer than 62 bytes, or if the hasher fails.
pub async fn fold_labels<H: TriadHasher + ?Sized>(labels: &[&str], hasher: &H) -> Result<U256> {
	let mut running = U256::ZERO;
	for label in labels.iter().rev() {
		let pair = pack_label(label)?;
		running = hasher.hash([running, pair.low, pair.high]).await?;
		trace!(label, running = %running, "folded label");
	}

	Ok(running)
}
