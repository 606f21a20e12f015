/* src/loader/snapshot.rs */

use super::Loader;
use crate::source::Source;
use std::collections::BTreeMap;

/// A loader that serves content captured once at construction.
///
/// Identifiers missing from the snapshot stay missing, even if the backing
/// storage gains them later. Content is kept as the raw bytes that were read.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SnapshotLoader {
	entries: BTreeMap<String, Vec<u8>>,
}

impl SnapshotLoader {
	/// Builds a snapshot from already-resolved pairs.
	pub fn new(entries: BTreeMap<String, Vec<u8>>) -> Self {
		Self { entries }
	}

	/// Reads every identifier from `source` exactly once.
	///
	/// Failed reads are logged and left out of the snapshot.
	pub fn preload<S, I>(source: &S, ids: I) -> Self
	where
		S: Source + ?Sized,
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let mut entries = BTreeMap::new();
		for id in ids {
			let id = id.as_ref();
			match source.read(id) {
				Ok(content) => {
					entries.insert(id.to_string(), content);
				}
				Err(_e) => {
					#[cfg(feature = "logging")]
					log::error!("lua: {}: {}", id, _e);
				}
			}
		}
		Self { entries }
	}

	/// The bytes captured for `id`, exactly as read.
	pub fn bytes(&self, id: &str) -> Option<&[u8]> {
		self.entries.get(id).map(Vec::as_slice)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Loader for SnapshotLoader {
	fn get(&self, id: &str) -> Option<String> {
		self.bytes(id)
			.map(|bytes| String::from_utf8_lossy(bytes).into_owned())
	}
}
