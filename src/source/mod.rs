/* src/source/mod.rs */

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use crate::SourceError;

/// Abstract data source that retrieves raw bytes by key.
pub trait Source: Send + Sync {
	/// Read raw data as a vector of bytes.
	fn read(&self, key: &str) -> Result<Vec<u8>, SourceError>;

	/// Check if the resource exists at the given key.
	fn exists(&self, key: &str) -> bool;
}

impl<S: Source + ?Sized> Source for std::sync::Arc<S> {
	fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
		(**self).read(key)
	}

	fn exists(&self, key: &str) -> bool {
		(**self).exists(key)
	}
}
