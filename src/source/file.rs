/* src/source/file.rs */

use super::Source;
use crate::SourceError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A file system source backed by blocking `std::fs` reads.
///
/// Keys are interpreted as paths. An unrooted source reads them as given
/// (relative to the working directory); a rooted source joins them under its
/// root and refuses anything that resolves outside it.
#[derive(Debug, Default, Clone)]
pub struct FileSource {
	root: Option<PathBuf>,
}

impl FileSource {
	/// Create a FileSource that reads keys as plain paths.
	pub fn new() -> Self {
		Self { root: None }
	}

	/// Create a new FileSource rooted at the given path.
	pub fn rooted(root: impl Into<PathBuf>) -> Self {
		Self {
			root: Some(root.into()),
		}
	}

	fn resolve(&self, key: &str) -> Result<PathBuf, SourceError> {
		match &self.root {
			Some(root) => Self::resolve_secure(root, key),
			None => Ok(PathBuf::from(key)),
		}
	}

	/// Resolves the path safely, ensuring it is within the root directory.
	fn resolve_secure(root: &Path, key: &str) -> Result<PathBuf, SourceError> {
		// Basic path traversal check
		for component in Path::new(key).components() {
			if matches!(
				component,
				Component::ParentDir | Component::RootDir | Component::Prefix(_)
			) {
				return Err(SourceError::SandboxViolation);
			}
		}

		let canonical_root = fs::canonicalize(root)?;

		match fs::canonicalize(root.join(key)) {
			Ok(canonical_path) => {
				if canonical_path.starts_with(&canonical_root) {
					Ok(canonical_path)
				} else {
					Err(SourceError::SandboxViolation)
				}
			}
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound),
			Err(e) => Err(SourceError::Io(e)),
		}
	}
}

impl Source for FileSource {
	fn read(&self, key: &str) -> Result<Vec<u8>, SourceError> {
		let path = self.resolve(key)?;
		fs::read(path).map_err(|e| match e.kind() {
			std::io::ErrorKind::NotFound => SourceError::NotFound,
			_ => SourceError::Io(e),
		})
	}

	fn exists(&self, key: &str) -> bool {
		self.resolve(key).is_ok_and(|path| path.is_file())
	}
}
