use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

use crate::types::{Error, Result};

static STANDARD: Lazy<Records> = Lazy::new(|| {
	Records::from_json(include_str!("standard.json")).expect("embedded record catalog is valid")
});

/// A standard record, resolved with an integer key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
	pub key: u64,
	/// Identifier used to look the key up, e.g. `EVM`.
	pub name: String,
	/// Human readable description.
	#[serde(default)]
	pub label: String,
}

#[derive(Debug, Deserialize)]
struct Catalog {
	records: Vec<Record>,
}

/// Catalog of standard record keys.
#[derive(Debug, Clone)]
pub struct Records {
	records: Vec<Record>,
	by_name: HashMap<String, usize>,
}

impl Records {
	/// The catalog bundled with the crate.
	pub fn standard() -> Self {
		STANDARD.clone()
	}

	/// Parses a catalog of the form `{"records": [{"key": 3, "name": "EVM"}, ...]}`.
	///
	/// # Errors
	///
	/// Errors if the document is not a valid catalog.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let catalog: Catalog = serde_json::from_str(json)?;
		let by_name = catalog
			.records
			.iter()
			.enumerate()
			.map(|(i, record)| (record.name.clone(), i))
			.collect();

		Ok(Self {
			records: catalog.records,
			by_name,
		})
	}

	/// # Errors
	///
	/// Errors if the file cannot be read or is not a valid catalog.
	pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
		let path = path.as_ref();
		let json = fs::read_to_string(path)?;

		Ok(Self::from_json(&json)?)
	}

	/// Key of the standard record called `name`.
	///
	/// # Errors
	///
	/// Errors with [`Error::UnknownRecord`] if the catalog has no such record.
	pub fn key(&self, name: &str) -> Result<u64> {
		self.get(name)
			.map(|record| record.key)
			.ok_or_else(|| Error::UnknownRecord(name.to_string()))
	}

	pub fn get(&self, name: &str) -> Option<&Record> {
		self.by_name.get(name).map(|&i| &self.records[i])
	}

	/// Reverse of [`Records::key`]: the record registered under `key`.
	pub fn name(&self, key: u64) -> Option<&Record> {
		self.records.iter().find(|record| record.key == key)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Record> {
		self.records.iter()
	}
}
