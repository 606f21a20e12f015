/* src/loader/live.rs */

use super::Loader;
use crate::source::{FileSource, Source};

/// A loader that re-reads its source on every lookup.
///
/// Nothing is cached, so two calls for the same identifier may observe
/// different content.
#[derive(Debug, Default, Clone)]
pub struct LiveLoader<S = FileSource> {
	source: S,
}

impl<S: Source> LiveLoader<S> {
	pub const fn new(source: S) -> Self {
		Self { source }
	}
}

impl<S: Source> Loader for LiveLoader<S> {
	fn get(&self, id: &str) -> Option<String> {
		let bytes = self.source.read(id).ok()?;
		Some(String::from_utf8_lossy(&bytes).into_owned())
	}
}
