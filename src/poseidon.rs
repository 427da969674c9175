//! In-process Poseidon over the BN254 scalar field, with the circomlib
//! parameters the on-chain `Poseidon` contract was generated from.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use async_trait::async_trait;
use light_poseidon::{Poseidon, PoseidonHasher as _};
use ruint::aliases::U256;

use crate::contracts::{CollaboratorError, TriadHasher};

/// Order of the BN254 scalar field.
pub const FIELD_MODULUS: U256 = U256::from_limbs([
	0x43e1_f593_f000_0001,
	0x2833_e848_79b9_7091,
	0xb850_45b6_8181_585d,
	0x3064_4e72_e131_a029,
]);

#[derive(Debug, Default, Clone, Copy)]
pub struct PoseidonHasher;

impl PoseidonHasher {
	pub const fn new() -> Self {
		Self
	}

	/// # Errors
	///
	/// Errors if an input is not a field element.
	pub fn hash_triad(triad: [U256; 3]) -> Result<U256, CollaboratorError> {
		let inputs = triad
			.iter()
			.map(|value| {
				if *value >= FIELD_MODULUS {
					return Err(CollaboratorError::Reverted(format!(
						"{value} is not a BN254 field element"
					)));
				}
				Ok(Fr::from_be_bytes_mod_order(&value.to_be_bytes::<32>()))
			})
			.collect::<Result<Vec<_>, _>>()?;

		let mut poseidon = Poseidon::<Fr>::new_circom(inputs.len())
			.map_err(|e| CollaboratorError::Reverted(e.to_string()))?;
		let output = poseidon
			.hash(&inputs)
			.map_err(|e| CollaboratorError::Reverted(e.to_string()))?;

		Ok(U256::from_be_slice(&output.into_bigint().to_bytes_be()))
	}
}

#[async_trait]
impl TriadHasher for PoseidonHasher {
	async fn hash(&self, triad: [U256; 3]) -> Result<U256, CollaboratorError> {
		Self::hash_triad(triad)
	}
}
