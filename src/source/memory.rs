/* src/source/memory.rs */

use super::Source;
use crate::SourceError;
use std::collections::BTreeMap;

/// A simple in-memory source useful for testing and embedded environments.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
	data: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
	/// Creates a new empty MemorySource.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts data into the source.
	pub fn insert(&mut self, key: &str, value: impl Into<Vec<u8>>) {
		self.data.insert(key.to_string(), value.into());
	}

	/// Builder-style variant of [`insert`](Self::insert).
	pub fn with(mut self, key: &str, value: impl Into<Vec<u8>>) -> Self {
		self.insert(key, value);
		self
	}
}

impl Source for MemorySource {
	fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
		self.data.get(key).cloned().ok_or(SourceError::NotFound)
	}

	fn exists(&self, key: &str) -> bool {
		self.data.contains_key(key)
	}
}
